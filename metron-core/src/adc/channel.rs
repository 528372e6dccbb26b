//! Pin-to-channel resolution
//!
//! Analog input pins live in a virtual bank above the chip's GPIO banks;
//! the pin-numbering authority supplies the base of that bank. Subtracting
//! the base yields the converter channel index.

use super::ADC_CHANNEL_COUNT;

/// Errors detected while resolving an analog input pin
///
/// Both variants signal a build or configuration defect, not a runtime
/// condition: the firmware boundary maps them to an unrecoverable shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin does not map to one of the converter's input channels
    NotAnAdcPin,
    /// Converter module is not clocked or held disabled
    NotEnabled,
}

/// Validated handle for one analog input channel
///
/// Created once by [`super::Adc::setup`]; immutable afterwards. A plain
/// value, not a managed resource: handles are freely copied and need no
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel {
    index: u8,
}

impl AdcChannel {
    /// Map `pin` to a channel index against `pin_base`.
    ///
    /// Wrapping subtraction folds pins below the base into the out-of-range
    /// check, so any pin outside the analog bank fails.
    pub(crate) fn resolve(pin_base: u8, pin: u8) -> Result<Self, ConfigError> {
        let index = pin.wrapping_sub(pin_base);
        if index >= ADC_CHANNEL_COUNT {
            return Err(ConfigError::NotAnAdcPin);
        }
        Ok(Self { index })
    }

    /// The converter channel index, in `[0, ADC_CHANNEL_COUNT)`.
    pub fn index(self) -> u8 {
        self.index
    }
}
