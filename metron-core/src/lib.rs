//! Board-agnostic ADC sampling core for Metron firmware
//!
//! This crate contains all conversion logic that does not depend on a
//! specific converter peripheral:
//!
//! - Hardware abstraction trait for the converter ([`traits::AdcHardware`])
//! - Pin-to-channel resolution ([`adc::AdcChannel`])
//! - The non-blocking sample/read/cancel state machine ([`adc::Adc`])
//!
//! The cooperative scheduler that owns ticks lives outside this crate; all
//! suspension is expressed through the tick delay returned by
//! [`adc::Adc::sample`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod adc;
pub mod traits;

// Re-export key types at crate root for convenience
pub use adc::{Adc, AdcChannel, ConfigError, ADC_MAX};
pub use traits::{AdcHardware, FifoEntry};
