//! Non-blocking ADC sampling
//!
//! One physical converter is shared by up to [`ADC_CHANNEL_COUNT`] input
//! channels. [`channel`] validates pins and hands out channel handles;
//! [`sampler`] arbitrates the single conversion slot and implements the
//! start/drain/read/cancel protocol on top of [`crate::traits::AdcHardware`].

pub mod channel;
pub mod sampler;

pub use channel::{AdcChannel, ConfigError};
pub use sampler::{Adc, Conversion};

/// Maximum value of a converted sample (12-bit resolution).
///
/// Published so consuming subsystems can scale readings without knowing
/// the converter's width.
pub const ADC_MAX: u16 = 4095;

/// Number of input channels multiplexed onto the single converter.
pub const ADC_CHANNEL_COUNT: u8 = 8;

/// Scheduler ticks a caller should wait before retrying [`Adc::sample`].
///
/// Bounds the worst-case conversion plus settle latency. The same constant
/// is returned whether a conversion was just started or the FIFO came up
/// empty on a retry; callers schedule around that exact value.
pub const SAMPLE_DELAY_TICKS: u32 = 160;
