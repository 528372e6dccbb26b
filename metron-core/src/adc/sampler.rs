//! Conversion arbitration and the sampling state machine
//!
//! The converter has one physical conversion slot. All channel handles
//! share a single [`Adc`] instance which records who owns the slot and
//! drives the start/drain/read/cancel protocol. Nothing here ever blocks:
//! `sample` does at most one register write plus a FIFO drain bounded by
//! the occupancy observed on entry, and all waiting is pushed back to the
//! caller through the returned tick delay.

use super::channel::{AdcChannel, ConfigError};
use super::SAMPLE_DELAY_TICKS;
use crate::traits::AdcHardware;

/// Ownership of the single conversion slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Conversion {
    /// No conversion in flight
    Idle,
    /// A conversion was started for this channel and its result has not
    /// been retrieved yet
    Pending(u8),
}

/// Shared ADC peripheral driver
///
/// Owns the converter hardware and the arbitration state. The scheduler's
/// execution context holds exactly one instance per physical converter;
/// independent instances can be built around mock hardware for testing.
#[derive(Debug)]
pub struct Adc<H: AdcHardware> {
    hw: H,
    /// Base of the virtual pin bank the analog inputs live in
    pin_base: u8,
    conversion: Conversion,
    /// Single shared result slot; meaningful only between a `sample`
    /// returning ready and the next conversion start for any channel
    last_sample: u16,
}

impl<H: AdcHardware> Adc<H> {
    /// Wrap the converter hardware.
    ///
    /// `pin_base` is the pin number of the first analog input, supplied by
    /// the board's pin-numbering convention.
    pub fn new(hw: H, pin_base: u8) -> Self {
        Self {
            hw,
            pin_base,
            conversion: Conversion::Idle,
            last_sample: 0,
        }
    }

    /// Validate `pin` and hand out its channel handle.
    ///
    /// Failure is fatal and non-retryable; callers route it to the
    /// shutdown path rather than retrying.
    pub fn setup(&self, pin: u8) -> Result<AdcChannel, ConfigError> {
        let ch = AdcChannel::resolve(self.pin_base, pin)?;
        if !self.hw.is_enabled() {
            return Err(ConfigError::NotEnabled);
        }
        Ok(ch)
    }

    /// Try to sample a value.
    ///
    /// Returns zero once a result for `ch` is available via
    /// [`read`](Self::read), otherwise the number of scheduler ticks the
    /// caller should wait before retrying.
    pub fn sample(&mut self, ch: AdcChannel) -> u32 {
        match self.conversion {
            Conversion::Idle => {
                // Claim the slot and trigger the conversion
                self.hw.start_conversion(ch.index());
                self.conversion = Conversion::Pending(ch.index());
            }
            Conversion::Pending(owner) if owner == ch.index() => {
                // Drain whatever the FIFO holds right now; entries tagged
                // for other channels are stale leftovers and are dropped
                while self.hw.fifo_count() != 0 {
                    let entry = self.hw.pop_fifo();
                    if entry.channel() == ch.index() {
                        self.conversion = Conversion::Idle;
                        self.last_sample = entry.value();
                        return 0;
                    }
                }
            }
            // Slot owned by another channel; no hardware write
            Conversion::Pending(_) => {}
        }
        SAMPLE_DELAY_TICKS
    }

    /// Read the last sampled value.
    ///
    /// Use only after this handle's own [`sample`](Self::sample) returned
    /// zero; the slot is shared, so a later completion for any channel
    /// overwrites it.
    pub fn read(&self, _ch: AdcChannel) -> u16 {
        self.last_sample
    }

    /// Cancel a conversion that may have been started for `ch`.
    ///
    /// Frees the slot without consuming a result; any entry the hardware
    /// already queued is discarded by whichever future `sample` next
    /// drains the FIFO. A channel cannot cancel a conversion it does not
    /// own, so this is a no-op from any other state.
    pub fn cancel(&mut self, ch: AdcChannel) {
        if self.conversion == Conversion::Pending(ch.index()) {
            self.conversion = Conversion::Idle;
        }
    }

    /// Current ownership of the conversion slot.
    pub fn conversion(&self) -> Conversion {
        self.conversion
    }
}
