//! Bandpass filter with a noise-driven wandering cutoff.

use crate::oscillator::wavetable_oscillator::WavetableOscillator;
use crate::parameters::ModulatorSettings;
use crate::utils::filter::{FilterMode, Svf};
use crate::utils::random::RandomSource;
use crate::ProcessSpec;

/// Lowest cutoff the drift may reach, in Hz.
pub const MIN_DRIFT_HZ: f32 = 25.0;

/// Highest cutoff the drift may reach, in Hz.
pub const MAX_DRIFT_HZ: f32 = 20000.0;

/// Resonant bandpass whose cutoff follows `center + band * (lfo + noise)`.
///
/// The cutoff is recomputed once per block by [`RandomBandpass::drift`]: a
/// uniform draw is fed into a slow sine oscillator, scaled by the band and
/// offset by the center frequency. The result takes effect on the next block.
#[derive(Debug, Clone)]
pub struct RandomBandpass {
    filter: Svf,
    oscillator: WavetableOscillator,
    center: f32,
    band: f32,
}

impl Default for RandomBandpass {
    fn default() -> Self {
        Self {
            filter: Svf::new(),
            oscillator: WavetableOscillator::sine(),
            center: 1000.0,
            band: 0.0,
        }
    }
}

impl RandomBandpass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, spec: &ProcessSpec) {
        self.filter.prepare(spec);
        self.filter.set_cutoff(1000.0);
        self.filter.set_resonance(60.0);
        self.oscillator.prepare(spec.sample_rate as f32);
    }

    /// Applies rate, band, center and Q for the coming block.
    #[inline]
    pub fn update(&mut self, settings: &ModulatorSettings) {
        self.oscillator.set_frequency(settings.rate);
        self.filter.set_resonance(settings.q);
        self.center = settings.center;
        self.band = settings.band;
    }

    /// Moves the oscillator across a block of `block_size` samples and pushes
    /// the new cutoff. Returns the cutoff in Hz.
    #[inline]
    pub fn drift<R: RandomSource + ?Sized>(&mut self, random: &mut R, block_size: usize) -> f32 {
        self.oscillator.advance(block_size.saturating_sub(1));
        let control = self.oscillator.process_sample(random.next_bipolar());
        let cutoff = (control * self.band + self.center).clamp(MIN_DRIFT_HZ, MAX_DRIFT_HZ);
        self.filter.set_cutoff(cutoff);
        cutoff
    }

    #[inline]
    pub fn process(&mut self, channel: usize, in_: f32) -> f32 {
        self.filter.process(channel, in_, FilterMode::BandPass)
    }

    #[inline]
    pub fn snap_to_zero(&mut self) {
        self.filter.snap_to_zero();
    }

    #[inline]
    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff()
    }
}
