//! Simulated GPIO backend
//!
//! Output pins latch the requested level so callers can read their own
//! state back; nothing is driven anywhere. Input pins always read low.

use metron_hal::gpio::{InputPin, OutputPin};

/// Simulated output pin
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimOutputPin {
    pin: u8,
    high: bool,
}

impl SimOutputPin {
    /// Create an output pin at the given initial level.
    pub fn new(pin: u8, high: bool) -> Self {
        Self { pin, high }
    }

    /// Pin number this simulated pin stands in for.
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl OutputPin for SimOutputPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Simulated input pin; always reads low
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimInputPin {
    pin: u8,
}

impl SimInputPin {
    /// Create an input pin (the pull-up setting is ignored).
    pub fn new(pin: u8) -> Self {
        Self { pin }
    }

    /// Pin number this simulated pin stands in for.
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl InputPin for SimInputPin {
    fn is_high(&self) -> bool {
        false
    }
}
