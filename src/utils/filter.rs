//! Zero-delay-feedback state variable filter with per-channel state.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::{ProcessSpec, NUM_CHANNELS};

const M_PI_F: f32 = core::f32::consts::PI;

/// Lowest cutoff accepted by [`Svf::set_cutoff`], in Hz.
pub const MIN_CUTOFF_HZ: f32 = 20.0;

/// Highest cutoff as a fraction of the sample rate.
pub const MAX_NORMALIZED_CUTOFF: f32 = 0.497;

/// Lowest resonance accepted by [`Svf::set_resonance`].
pub const MIN_RESONANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    BandPass,
    BandPassNormalized,
    HighPass,
    /// Lowpass minus highpass, boosting the cutoff region.
    Peak,
}

/// Prewarped integrator gain for a normalized frequency.
#[inline]
pub fn tan(f: f32) -> f32 {
    // Clip coefficient to about 100.
    let f = f.clamp(0.0, MAX_NORMALIZED_CUTOFF);
    (M_PI_F * f).tan()
}

/// Topology-preserving state variable filter.
///
/// Cutoff and resonance are shared by every channel, the integrator state is
/// kept per channel index.
#[derive(Debug, Clone)]
pub struct Svf {
    sample_rate: f32,
    cutoff: f32,
    resonance: f32,

    g: f32,
    r: f32,
    h: f32,

    state_1: [f32; NUM_CHANNELS],
    state_2: [f32; NUM_CHANNELS],
}

impl Default for Svf {
    fn default() -> Self {
        let mut filter = Self {
            sample_rate: 48000.0,
            cutoff: 1000.0,
            resonance: 1.0 / core::f32::consts::SQRT_2,
            g: 0.0,
            r: 0.0,
            h: 0.0,
            state_1: [0.0; NUM_CHANNELS],
            state_2: [0.0; NUM_CHANNELS],
        };
        filter.update_coefficients();
        filter
    }
}

impl Svf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the sample rate and clears the state.
    pub fn prepare(&mut self, spec: &ProcessSpec) {
        self.sample_rate = spec.sample_rate as f32;
        self.cutoff = self.clamp_cutoff(self.cutoff);
        self.update_coefficients();
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state_1 = [0.0; NUM_CHANNELS];
        self.state_2 = [0.0; NUM_CHANNELS];
    }

    /// Force-zeroes the integrator state of every channel.
    ///
    /// Called at the end of each block so denormals and runaway values never
    /// survive into the next one.
    #[inline]
    pub fn snap_to_zero(&mut self) {
        self.reset();
    }

    #[inline]
    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff = self.clamp_cutoff(cutoff);
        self.update_coefficients();
    }

    #[inline]
    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = if resonance.is_finite() {
            resonance.max(MIN_RESONANCE)
        } else {
            MIN_RESONANCE
        };
        self.update_coefficients();
    }

    #[inline]
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    #[inline]
    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    #[inline]
    fn clamp_cutoff(&self, cutoff: f32) -> f32 {
        let max = self.sample_rate * MAX_NORMALIZED_CUTOFF;
        if cutoff.is_nan() {
            MIN_CUTOFF_HZ
        } else {
            cutoff.clamp(MIN_CUTOFF_HZ, max)
        }
    }

    #[inline]
    fn update_coefficients(&mut self) {
        self.g = tan(self.cutoff / self.sample_rate);
        self.r = 1.0 / self.resonance;
        self.h = 1.0 / (1.0 + self.r * self.g + self.g * self.g);
    }

    /// Advances the state of `channel` by one sample.
    #[inline]
    pub fn process(&mut self, channel: usize, in_: f32, mode: FilterMode) -> f32 {
        let state_1 = &mut self.state_1[channel];
        let state_2 = &mut self.state_2[channel];

        let hp = (in_ - self.r * *state_1 - self.g * *state_1 - *state_2) * self.h;
        let bp = self.g * hp + *state_1;
        *state_1 = self.g * hp + bp;
        let lp = self.g * bp + *state_2;
        *state_2 = self.g * bp + lp;

        match mode {
            FilterMode::LowPass => lp,
            FilterMode::BandPass => bp,
            FilterMode::BandPassNormalized => bp * self.r,
            FilterMode::HighPass => hp,
            FilterMode::Peak => lp - hp,
        }
    }

    /// Filters `in_out` in place through the state of `channel`.
    #[inline]
    pub fn process_buffer(&mut self, channel: usize, in_out: &mut [f32], mode: FilterMode) {
        for sample in in_out.iter_mut() {
            *sample = self.process(channel, *sample, mode);
        }
    }
}
