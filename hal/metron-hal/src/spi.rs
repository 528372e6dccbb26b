//! SPI bus abstraction
//!
//! A minimal master-side trait covering the shift-register style traffic
//! the firmware generates; chip backends map it onto whatever controller
//! or OS device the board provides.

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Transfer data (simultaneous read/write)
    ///
    /// Writes data from `write` while reading into `read`. Both buffers
    /// must be the same length.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Transfer data in place
    ///
    /// Shifts the buffer out while reading the response back into it.
    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}
