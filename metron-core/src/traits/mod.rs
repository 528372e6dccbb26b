//! Hardware abstraction traits
//!
//! These traits define the interface between the sampling logic and the
//! chip-specific converter implementation.

pub mod adc;

pub use adc::{AdcHardware, FifoEntry};
