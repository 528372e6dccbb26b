//! AM335x-specific HAL for Metron firmware
//!
//! This crate provides AM335x-specific implementations:
//! - Touchscreen-controller ADC (TSCADC) register access
//! - Analog pin numbering for the board's pin convention
//!
//! The chip is programmed through plain memory-mapped registers, so this
//! is the one crate in the workspace that contains unsafe code: the
//! volatile load/store primitives everything else is abstracted over.

#![no_std]

pub mod adc;
pub mod pins;

pub use adc::Tscadc;
