//! Mid-register boil: white noise through two resonant bandpasses.

use super::random_bandpass::RandomBandpass;
use super::Layer;
use crate::noise::white_noise::WhiteNoise;
use crate::parameters::{MidBoilSettings, Parameters};
use crate::utils::filter::{FilterMode, Svf};
use crate::utils::random::RandomSource;
use crate::utils::units::random_gain;
use crate::ProcessSpec;

#[derive(Debug, Clone, Default)]
pub struct MidBoilLayer {
    bandpass: Svf,
    random_bandpass: RandomBandpass,
    settings: MidBoilSettings,
}

impl MidBoilLayer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn settings(&self) -> &MidBoilSettings {
        &self.settings
    }
}

impl<R: RandomSource> Layer<R> for MidBoilLayer {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.bandpass.prepare(spec);
        self.bandpass.set_cutoff(1000.0);
        self.bandpass.set_resonance(1.0);
        self.random_bandpass.prepare(spec);
    }

    fn update(&mut self, parameters: &Parameters) {
        self.settings = parameters.mid_boil();
        self.bandpass.set_cutoff(self.settings.cutoff);
        self.bandpass.set_resonance(self.settings.q);
        self.random_bandpass.update(&self.settings.modulator);
    }

    fn render(
        &mut self,
        random: &mut R,
        _parameters: &Parameters,
        left: &mut [f32],
        right: &mut [f32],
    ) {
        let gain = self.settings.gain;
        let swell = random_gain(self.settings.random_gain_db, random.next_float());

        let mut noise = WhiteNoise::new(&mut *random);
        for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
            let s = self.bandpass.process(0, noise.next(), FilterMode::BandPass) * gain;
            let s = self.random_bandpass.process(0, s);
            *left_sample += s * swell;
            *right_sample += s * swell;
        }

        self.random_bandpass.drift(random, left.len());

        self.bandpass.snap_to_zero();
        self.random_bandpass.snap_to_zero();
    }
}
