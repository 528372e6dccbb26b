//! TSCADC register access
//!
//! The AM335x routes its eight analog inputs through the touchscreen
//! controller ADC. The sampler only ever touches four of its registers:
//! CTRL to confirm the module is clocked, STEPENABLE to queue a one-shot
//! conversion step, and the FIFO0 count/data pair to collect results.

use core::ptr;

use metron_core::traits::{AdcHardware, FifoEntry};

/// Physical base address of the TSCADC register block.
pub const TSCADC_BASE: usize = 0x44e0_d000;

// Register offsets, in 32-bit words
const REG_CTRL: usize = 0x040 / 4;
const REG_STEPENABLE: usize = 0x054 / 4;
const REG_FIFO0COUNT: usize = 0x0e4 / 4;
const REG_FIFO0DATA: usize = 0x100 / 4;

/// Memory-mapped TSCADC peripheral
///
/// Ordered, non-cached 32-bit access to the register block. Does not
/// implement `Clone`: exactly one value exists per physical converter,
/// and it is handed to the [`metron_core::Adc`] arbiter that owns it.
#[derive(Debug)]
pub struct Tscadc {
    base: *mut u32,
}

impl Tscadc {
    /// Wrap a register block at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to a TSCADC-compatible register window that
    /// stays mapped for the lifetime of the value, and no other code may
    /// access those registers while this value exists.
    pub const unsafe fn from_base(base: *mut u32) -> Self {
        Self { base }
    }

    /// Wrap the converter at its fixed physical address.
    ///
    /// # Safety
    ///
    /// Call at most once, from the MCU build where [`TSCADC_BASE`] is
    /// actually mapped.
    pub unsafe fn steal() -> Self {
        Self::from_base(TSCADC_BASE as *mut u32)
    }

    fn read(&self, word: usize) -> u32 {
        unsafe { ptr::read_volatile(self.base.add(word)) }
    }

    fn write(&mut self, word: usize, value: u32) {
        unsafe { ptr::write_volatile(self.base.add(word), value) }
    }
}

impl AdcHardware for Tscadc {
    fn is_enabled(&self) -> bool {
        // Whole-register check: the module powers up with CTRL all zero
        self.read(REG_CTRL) != 0
    }

    fn start_conversion(&mut self, channel: u8) {
        // Step 0 is the touchscreen charge step; conversion steps for
        // channel c sit at bit c + 1
        self.write(REG_STEPENABLE, 1 << (channel + 1));
    }

    fn fifo_count(&self) -> u32 {
        self.read(REG_FIFO0COUNT)
    }

    fn pop_fifo(&mut self) -> FifoEntry {
        // Reading FIFO0DATA pops the entry in hardware
        FifoEntry::from_raw(self.read(REG_FIFO0DATA))
    }
}
