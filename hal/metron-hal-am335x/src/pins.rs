//! Analog pin numbering
//!
//! The board's pin convention numbers GPIOs as `bank * 32 + bit` across
//! four banks; the eight analog inputs occupy a virtual fifth bank right
//! above them. `metron_core::Adc` is handed [`ADC_PIN_BASE`] so it can
//! map pins back to converter channels.

use metron_core::adc::ADC_CHANNEL_COUNT;

/// First pin number of the virtual analog bank.
pub const ADC_PIN_BASE: u8 = 4 * 32;

/// Pin number of analog input `index` (AIN0..AIN7).
pub const fn ain(index: u8) -> u8 {
    ADC_PIN_BASE + index
}

/// Whether `pin` falls inside the virtual analog bank.
pub const fn is_adc_pin(pin: u8) -> bool {
    pin >= ADC_PIN_BASE && pin < ADC_PIN_BASE + ADC_CHANNEL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ain_numbering() {
        assert_eq!(ain(0), 128);
        assert_eq!(ain(4), 132);
        assert_eq!(ain(7), 135);
    }

    #[test]
    fn test_adc_pin_range() {
        assert!(!is_adc_pin(127));
        assert!(is_adc_pin(128));
        assert!(is_adc_pin(135));
        assert!(!is_adc_pin(136));
    }
}
