//! Low-register boil: pink noise through an LFO-swept bandpass.

use super::random_bandpass::RandomBandpass;
use super::Layer;
use crate::noise::pink_noise::PinkNoise;
use crate::oscillator::wavetable_oscillator::WavetableOscillator;
use crate::parameters::{LowBoilSettings, Parameters};
use crate::utils::filter::{FilterMode, Svf};
use crate::utils::random::RandomSource;
use crate::utils::units::random_gain;
use crate::ProcessSpec;

#[derive(Debug, Clone)]
pub struct LowBoilLayer<R> {
    noise: PinkNoise<R>,
    bandpass: Svf,
    lfo: WavetableOscillator,
    random_bandpass: RandomBandpass,
    settings: LowBoilSettings,
}

impl<R: RandomSource> LowBoilLayer<R> {
    /// Creates the layer around its own pink noise stream.
    pub fn new(random: R) -> Self {
        Self {
            noise: PinkNoise::new(random),
            bandpass: Svf::new(),
            lfo: WavetableOscillator::sine(),
            random_bandpass: RandomBandpass::new(),
            settings: LowBoilSettings::default(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &LowBoilSettings {
        &self.settings
    }
}

impl<R: RandomSource> Layer<R> for LowBoilLayer<R> {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.bandpass.prepare(spec);
        self.bandpass.set_cutoff(10.0);
        self.bandpass.set_resonance(1.0);
        self.lfo.prepare(spec.sample_rate as f32);
        self.random_bandpass.prepare(spec);
        self.noise.reset();
    }

    fn update(&mut self, parameters: &Parameters) {
        self.settings = parameters.low_boil();
        self.bandpass.set_resonance(self.settings.q);
        self.lfo.set_frequency(self.settings.lfo_frequency);
        self.random_bandpass.update(&self.settings.modulator);
    }

    fn render(
        &mut self,
        random: &mut R,
        _parameters: &Parameters,
        left: &mut [f32],
        right: &mut [f32],
    ) {
        let block_size = left.len();

        // The sweep is evaluated at the block start, then skips the rest of
        // the block so its rate stays in Hz.
        let sweep = self.lfo.process_sample(0.0);
        self.lfo.advance(block_size.saturating_sub(1));
        self.bandpass
            .set_cutoff(self.settings.cutoff + self.settings.lfo_depth * sweep);

        let gain = self.settings.gain;
        let swell = random_gain(self.settings.random_gain_db, random.next_float());

        for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
            let s = self.bandpass.process(0, self.noise.next(), FilterMode::BandPass) * gain;
            let s = self.random_bandpass.process(0, s);
            *left_sample += s * swell;
            *right_sample += s * swell;
        }

        self.random_bandpass.drift(random, block_size);

        self.bandpass.snap_to_zero();
        self.random_bandpass.snap_to_zero();
    }
}
