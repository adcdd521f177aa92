//! Decorrelated pink noise spread across the stereo field.

use super::random_bandpass::RandomBandpass;
use super::Layer;
use crate::noise::pink_noise::PinkNoise;
use crate::parameters::{Parameters, StereoWidthSettings};
use crate::utils::filter::{FilterMode, Svf};
use crate::utils::parameter_interpolator::ParameterInterpolator;
use crate::utils::random::RandomSource;
use crate::utils::smoother::BlockSmoother;
use crate::ProcessSpec;

/// Gain slew cutoff, in Hz of the block rate.
const GAIN_SMOOTHING_HZ: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct StereoWidthLayer<R> {
    noise: [PinkNoise<R>; 2],
    highpass: Svf,
    random_bandpass: RandomBandpass,
    gain_smoother: BlockSmoother,
    previous_gain: f32,
    primed: bool,
    settings: StereoWidthSettings,
}

impl<R: RandomSource> StereoWidthLayer<R> {
    /// Creates the layer around one pink noise stream per channel.
    pub fn new(left: R, right: R) -> Self {
        Self {
            noise: [PinkNoise::new(left), PinkNoise::new(right)],
            highpass: Svf::new(),
            random_bandpass: RandomBandpass::new(),
            gain_smoother: BlockSmoother::new(),
            previous_gain: 0.0,
            primed: false,
            settings: StereoWidthSettings::default(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &StereoWidthSettings {
        &self.settings
    }
}

impl<R: RandomSource> Layer<R> for StereoWidthLayer<R> {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.highpass.prepare(spec);
        self.random_bandpass.prepare(spec);
        self.gain_smoother
            .prepare(GAIN_SMOOTHING_HZ, spec.maximum_block_size, spec.sample_rate);
        for noise in self.noise.iter_mut() {
            noise.reset();
        }
        self.primed = false;
    }

    fn update(&mut self, parameters: &Parameters) {
        self.settings = parameters.stereo_width();
        self.highpass.set_cutoff(self.settings.cutoff);
        self.highpass.set_resonance(self.settings.q);
        self.random_bandpass.update(&self.settings.modulator);

        // Start from the current gain rather than fading in after prepare.
        if !self.primed {
            self.gain_smoother.reset(self.settings.gain);
            self.previous_gain = self.settings.gain;
            self.primed = true;
        }
    }

    fn render(
        &mut self,
        random: &mut R,
        _parameters: &Parameters,
        left: &mut [f32],
        right: &mut [f32],
    ) {
        let block_size = left.len();
        let target_gain = self.gain_smoother.process(self.settings.gain);
        let mut gain = ParameterInterpolator::new(&mut self.previous_gain, target_gain, block_size);
        let side_gain = 0.5 * self.settings.width;

        for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
            let l = self.highpass.process(0, self.noise[0].next(), FilterMode::HighPass);
            let r = self.highpass.process(1, self.noise[1].next(), FilterMode::HighPass);
            let l = self.random_bandpass.process(0, l);
            let r = self.random_bandpass.process(1, r);

            let mid = 0.5 * (l + r);
            let side = side_gain * (l - r);
            let g = gain.next();
            *left_sample += (mid + side) * g;
            *right_sample += (mid - side) * g;
        }
        drop(gain);

        self.random_bandpass.drift(random, block_size);

        self.highpass.snap_to_zero();
        self.random_bandpass.snap_to_zero();
    }
}
