//! Host simulator HAL for Metron firmware
//!
//! Stand-in backends with no hardware behind them, for running the
//! firmware logic on a development host:
//! - GPIO pins that latch their state and drive nothing
//! - An SPI bus that ignores all traffic
//! - An ADC whose conversions complete immediately and read zero

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod spi;

pub use adc::SimAdc;
pub use gpio::{SimInputPin, SimOutputPin};
pub use spi::SimSpiBus;
