//! ADC converter hardware trait
//!
//! The sampling state machine in [`crate::adc`] is written against this
//! trait so it can be driven by the real memory-mapped converter on the
//! target or by a scripted mock on the host.

/// One entry of the converter's result FIFO.
///
/// The hardware packs a channel tag together with the converted value into
/// a single 32-bit word: bits 0..12 hold the 12-bit sample, bits 16.. hold
/// the channel the sample was converted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoEntry(u32);

impl FifoEntry {
    /// Wrap a raw FIFO data word as read from the peripheral.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Build an entry from its parts (simulators and tests).
    pub const fn pack(channel: u8, value: u16) -> Self {
        Self(((channel as u32) << 16) | (value as u32 & 0x0fff))
    }

    /// The raw 32-bit word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Channel the entry was converted for.
    pub const fn channel(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The 12-bit converted value.
    pub const fn value(self) -> u16 {
        (self.0 & 0x0fff) as u16
    }
}

/// Converter peripheral access
///
/// Implementations wrap the handful of registers the sampler touches.
/// All operations must complete immediately; the sampler relies on them
/// never waiting on the hardware.
pub trait AdcHardware {
    /// Check whether the converter module is clocked and enabled.
    ///
    /// Read once at setup; a disabled module is a build/configuration
    /// defect, not a runtime condition.
    fn is_enabled(&self) -> bool;

    /// Queue a one-shot conversion for `channel`.
    ///
    /// The result arrives in the FIFO some time later, tagged with the
    /// channel index.
    fn start_conversion(&mut self, channel: u8);

    /// Number of entries currently held in the result FIFO.
    fn fifo_count(&self) -> u32;

    /// Pop the oldest FIFO entry.
    ///
    /// Only call while [`fifo_count`](Self::fifo_count) is nonzero.
    fn pop_fifo(&mut self) -> FifoEntry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_packing() {
        let entry = FifoEntry::pack(4, 2048);
        assert_eq!(entry.channel(), 4);
        assert_eq!(entry.value(), 2048);
        assert_eq!(entry.raw(), (4 << 16) | 2048);
    }

    #[test]
    fn test_value_masked_to_12_bits() {
        // Reserved bits 12..16 of the data word never leak into the value
        let entry = FifoEntry::from_raw((7 << 16) | 0xf123);
        assert_eq!(entry.channel(), 7);
        assert_eq!(entry.value(), 0x123);
    }
}
