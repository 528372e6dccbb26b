//! Simulated SPI backend
//!
//! Writes disappear, reads come back as zeros, transfers never fail.

use core::convert::Infallible;

use metron_hal::spi::SpiBus;

/// Simulated SPI bus
#[derive(Debug, Default)]
pub struct SimSpiBus;

impl SimSpiBus {
    /// Create a simulated bus.
    pub fn new() -> Self {
        Self
    }
}

impl SpiBus for SimSpiBus {
    type Error = Infallible;

    fn transfer(&mut self, read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        Ok(())
    }

    fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        data.fill(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_come_back_zero() {
        let mut bus = SimSpiBus::new();

        let mut rx = [0xffu8; 4];
        bus.transfer(&mut rx, &[1, 2, 3, 4]).unwrap();
        assert_eq!(rx, [0; 4]);

        let mut buf = [0xaau8; 2];
        bus.transfer_in_place(&mut buf).unwrap();
        assert_eq!(buf, [0; 2]);

        bus.write(&[0x55]).unwrap();
    }
}
