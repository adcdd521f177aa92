//! Pink noise from a bank of one-pole filters.
//!
//! White noise is fed through six leaky integrators with staggered poles and
//! summed with fixed weights, approximating a -3dB/octave slope across the
//! audio band.

use super::white_noise::WhiteNoise;
use crate::utils::random::RandomSource;

const POLES: [f32; 6] = [0.99886, 0.99332, 0.96900, 0.86650, 0.55000, -0.7616];
const WEIGHTS: [f32; 6] = [0.0555179, 0.0750759, 0.1538520, 0.3104856, 0.5329522, -0.0168980];
const DIRECT_WEIGHT: f32 = 0.5362;
const DELAYED_WEIGHT: f32 = 0.115926;

/// Brings the summed bank back to roughly unit peak level.
const OUTPUT_GAIN: f32 = 0.11;

#[derive(Debug, Default, Clone)]
pub struct PinkNoise<R> {
    white: WhiteNoise<R>,
    state: [f32; 6],
    delayed: f32,
}

impl<R: RandomSource> PinkNoise<R> {
    pub fn new(random: R) -> Self {
        Self {
            white: WhiteNoise::new(random),
            state: [0.0; 6],
            delayed: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.state = [0.0; 6];
        self.delayed = 0.0;
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        let white = self.white.next();
        let mut sum = 0.0;

        for ((state, pole), weight) in self.state.iter_mut().zip(POLES).zip(WEIGHTS) {
            *state = pole * *state + white * weight;
            sum += *state;
        }

        let pink = sum + self.delayed + white * DIRECT_WEIGHT;
        self.delayed = white * DELAYED_WEIGHT;

        pink * OUTPUT_GAIN
    }

    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next();
        }
    }
}
