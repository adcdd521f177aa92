//! Procedural rain ambience synthesis.
//!
//! A stereo rain texture built from four parallel layers that are mixed once
//! per audio block:
//!
//! - *mid-boil*: white noise through a resonant bandpass with drifting cutoff.
//! - *low-boil*: pink noise through an LFO-swept bandpass.
//! - *stereo-width*: decorrelated pink noise, highpassed and widened.
//! - *droplet*: short stochastic transients panned across the field.
//!
//! The entry point is [`synth::RainSynth`], driven by a shared
//! [`parameters::Parameters`] table.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod layer;
pub mod noise;
pub mod oscillator;
pub mod parameters;
pub mod synth;
pub mod utils;

pub use parameters::{ParamId, Parameters};
pub use synth::{LayerKind, PrepareError, RainSynth};

/// Number of output channels rendered by the synth.
pub const NUM_CHANNELS: usize = 2;

/// Highest sample rate the core is tuned for, in Hz.
pub const MAX_SAMPLE_RATE: f64 = 192_000.0;

/// Processing context fixed at preparation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Largest number of frames passed to a single `process` call
    pub maximum_block_size: usize,
    /// Number of output channels
    pub num_channels: usize,
}

impl ProcessSpec {
    pub fn new(sample_rate: f64, maximum_block_size: usize) -> Self {
        Self {
            sample_rate,
            maximum_block_size,
            num_channels: NUM_CHANNELS,
        }
    }

    /// Duration of one sample in seconds.
    #[inline]
    pub fn sample_period(&self) -> f32 {
        (1.0 / self.sample_rate) as f32
    }
}

impl Default for ProcessSpec {
    fn default() -> Self {
        Self::new(48000.0, 512)
    }
}
