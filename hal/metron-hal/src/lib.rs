//! Metron Hardware Abstraction Layer
//!
//! This crate defines the digital-pin and bus traits that chip-specific
//! backends (AM335x, host simulator) implement. The converter trait lives
//! with the sampling logic in `metron-core`; what remains here are the
//! thin surfaces the surrounding firmware wires sensors and shift
//! registers through.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Consuming drivers / scheduler tasks    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  metron-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  metron-hal-  │       │  metron-hal-  │
//! │    am335x     │       │     sim       │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use spi::SpiBus;
