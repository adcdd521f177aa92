//! Stochastically retriggered droplet transients.

use super::Layer;
use crate::noise::droplet::DropletWave;
use crate::parameters::{DropletSettings, ParamId, Parameters};
use crate::utils::pan::cos_pan;
use crate::utils::random::RandomSource;
use crate::ProcessSpec;

/// A finished droplet restarts when a block's uniform draw exceeds this.
pub const TRIGGER_THRESHOLD: f32 = 0.9;

#[derive(Debug, Clone, Default)]
pub struct DropletLayer {
    droplet: DropletWave,
    settings: DropletSettings,
    triggers: u64,
}

impl DropletLayer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn droplet(&self) -> &DropletWave {
        &self.droplet
    }

    /// Number of droplets started since construction.
    #[inline]
    pub fn triggers(&self) -> u64 {
        self.triggers
    }

    /// Starts a new droplet if the previous one is over and the draw allows.
    /// Returns whether a droplet was started.
    #[inline]
    pub fn try_trigger<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> bool {
        if self.droplet.finished() && random.next_float() > TRIGGER_THRESHOLD {
            self.droplet.reset(
                random,
                self.settings.onset_window,
                self.settings.interval,
                self.settings.frequency,
            );
            self.triggers += 1;
            true
        } else {
            false
        }
    }
}

impl<R: RandomSource> Layer<R> for DropletLayer {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.droplet.prepare(spec);
        self.droplet.stop();
    }

    fn update(&mut self, parameters: &Parameters) {
        self.settings = parameters.droplet();
    }

    fn render(
        &mut self,
        random: &mut R,
        parameters: &Parameters,
        left: &mut [f32],
        right: &mut [f32],
    ) {
        self.try_trigger(random);

        let (left_gain, right_gain) = cos_pan(self.droplet.pan());

        for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
            let s = self.droplet.next() * parameters.get(ParamId::DropletGain);
            *left_sample += s * left_gain;
            *right_sample += s * right_gain;
        }
    }
}
