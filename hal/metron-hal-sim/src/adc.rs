//! Simulated ADC backend
//!
//! Every triggered conversion lands in the FIFO at once with value zero,
//! so a sampler polling it observes the normal start/retry/ready sequence
//! without any hardware latency.

use heapless::Deque;

use metron_core::adc::ADC_CHANNEL_COUNT;
use metron_core::traits::{AdcHardware, FifoEntry};

/// Simulated converter with an instantly-completing FIFO
#[derive(Debug, Default)]
pub struct SimAdc {
    fifo: Deque<FifoEntry, { ADC_CHANNEL_COUNT as usize }>,
}

impl SimAdc {
    /// Create a simulated converter with an empty FIFO.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdcHardware for SimAdc {
    fn is_enabled(&self) -> bool {
        true
    }

    fn start_conversion(&mut self, channel: u8) {
        // Conversion finishes immediately; the FIFO is deep enough for
        // one result per channel, anything beyond that is dropped
        let _ = self.fifo.push_back(FifoEntry::pack(channel, 0));
    }

    fn fifo_count(&self) -> u32 {
        self.fifo.len() as u32
    }

    fn pop_fifo(&mut self) -> FifoEntry {
        self.fifo.pop_front().unwrap_or(FifoEntry::from_raw(0))
    }
}
