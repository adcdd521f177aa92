//! Single pole lowpass running at block rate.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::one_pole;

/// Values below this are flushed to zero.
const FLUSH_THRESHOLD: f32 = 0.00001;

/// One-pole exponential smoother ticked once per block.
///
/// Slews a non-negative control value (typically a gain) so jumps between
/// blocks turn into short exponential glides. The cutoff is expressed in Hz
/// of the block rate, i.e. `sample_rate / block_size` ticks per second.
#[derive(Debug, Default, Clone)]
pub struct BlockSmoother {
    coefficient: f32,
    value: f32,
}

impl BlockSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, cutoff: f32, samples_per_block: usize, sample_rate: f64) {
        let block_rate = sample_rate / samples_per_block.max(1) as f64;
        let f = (cutoff as f64 / block_rate).min(0.497);
        let c0 = (core::f64::consts::PI * f).tan() as f32;
        self.coefficient = c0 / (1.0 + c0);
    }

    pub fn reset(&mut self, value: f32) {
        self.value = value;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        one_pole(&mut self.value, input, self.coefficient);
        if self.value < FLUSH_THRESHOLD {
            self.value = 0.0;
        }
        self.value
    }
}
