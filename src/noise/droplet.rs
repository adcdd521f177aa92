//! Single rain droplet transient.
//!
//! A triggered event made of four phases, timed from the last [`DropletWave::reset`]:
//!
//! ```text
//!   0 ........ onset ........ +d1 ........ +d2 ............ +d3
//!   | pre-roll |  attack tick  |    gap    | decaying ring  | finished
//! ```
//!
//! The attack tick reads `sin(t)` of the event clock and the ring is an
//! exponentially damped sine at the droplet's tone frequency.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::utils::random::RandomSource;
use crate::utils::remap;
use crate::ProcessSpec;

const PI: f32 = core::f32::consts::PI;
const TWO_PI: f32 = core::f32::consts::TAU;

/// Amplitude of the attack tick.
pub const ATTACK_AMPLITUDE: f32 = 1.0;

/// Amplitude of the ring before decay.
pub const RING_AMPLITUDE: f32 = 1.2;

/// Smallest decay window used as a divisor.
const MIN_DECAY_WINDOW: f32 = 1.0e-6;

#[derive(Debug, Clone)]
pub struct DropletWave {
    unit_time: f32,

    // Event clock in seconds. Infinite while idle.
    time: f32,

    onset: f32,
    delta_1: f32,
    delta_2: f32,
    delta_3: f32,

    decay_exponent: f32,
    tone_frequency: f32,
    pan: f32,
}

impl Default for DropletWave {
    fn default() -> Self {
        Self {
            unit_time: 1.0 / 48000.0,
            time: f32::INFINITY,
            onset: 0.0,
            delta_1: 0.0,
            delta_2: 0.0,
            delta_3: 0.0,
            decay_exponent: 0.0,
            tone_frequency: 0.0,
            pan: 0.5,
        }
    }
}

impl DropletWave {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, spec: &ProcessSpec) {
        self.unit_time = spec.sample_period();
    }

    /// Goes back to idle without starting a new event.
    pub fn stop(&mut self) {
        self.time = f32::INFINITY;
    }

    /// Starts a new event with randomized timing, tone and position.
    ///
    /// - `end_time`: latest onset, in seconds.
    /// - `interval_coefficient`: stretches the attack, gap and ring windows (0.0..1.0).
    /// - `frequency_coefficient`: raises the decay rate and the tone (0.0..1.0).
    pub fn reset<R: RandomSource + ?Sized>(
        &mut self,
        random: &mut R,
        end_time: f32,
        interval_coefficient: f32,
        frequency_coefficient: f32,
    ) {
        let end_time = if end_time.is_finite() {
            end_time.max(0.0)
        } else {
            0.0
        };
        let interval_coefficient = sanitize_coefficient(interval_coefficient);
        let frequency_coefficient = sanitize_coefficient(frequency_coefficient);

        self.onset = random.next_float() * end_time;
        self.delta_1 = interval_coefficient * random.next_float() * 0.002;
        self.delta_2 = 0.002 + interval_coefficient * random.next_float() * 0.004;
        self.delta_3 = 0.006 + interval_coefficient * random.next_float() * 0.006;

        // Keeps the phase boundaries ordered whatever the draws.
        self.delta_2 = self.delta_2.max(self.delta_1);
        self.delta_3 = self.delta_3.max(self.delta_2);

        self.decay_exponent = 3.0 + frequency_coefficient * random.next_float() * 12.0;
        self.tone_frequency = 1000.0 + frequency_coefficient * random.next_float() * 1000.0;
        self.time = 0.0;
        self.pan = remap(random.next_float(), 0.0, 0.48, 1.0, 0.52);
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.time > self.onset + self.delta_3
    }

    /// Advances the event clock by one sample and returns the output.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        self.time += self.unit_time;

        if self.time < self.onset {
            return 0.0;
        }
        if self.time < self.onset + self.delta_1 {
            return ATTACK_AMPLITUDE * self.time.sin();
        }
        if self.time < self.onset + self.delta_2 {
            return 0.0;
        }
        if self.time < self.onset + self.delta_3 {
            let t = self.time - self.onset - self.delta_2;
            let value = self.decay_envelope(t) * (TWO_PI * self.tone_frequency * t).sin();
            return value / PI;
        }

        0.0
    }

    /// Ring amplitude `t` seconds into the decay phase.
    #[inline]
    pub fn decay_envelope(&self, t: f32) -> f32 {
        let window = (self.delta_3 - self.delta_2).max(MIN_DECAY_WINDOW);
        (-self.decay_exponent * t / window).exp() * RING_AMPLITUDE
    }

    /// Stereo position drawn at the last reset, 0.0 (left) to 1.0 (right).
    #[inline]
    pub fn pan(&self) -> f32 {
        self.pan
    }

    /// Seconds elapsed since the last reset.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.time
    }

    /// Delay before the attack, in seconds.
    #[inline]
    pub fn onset(&self) -> f32 {
        self.onset
    }

    /// Ends of the attack, gap and ring windows, relative to the onset.
    #[inline]
    pub fn offsets(&self) -> [f32; 3] {
        [self.delta_1, self.delta_2, self.delta_3]
    }

    #[inline]
    pub fn decay_exponent(&self) -> f32 {
        self.decay_exponent
    }

    #[inline]
    pub fn tone_frequency(&self) -> f32 {
        self.tone_frequency
    }

    /// Total event length, in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.onset + self.delta_3
    }
}

#[inline]
fn sanitize_coefficient(coefficient: f32) -> f32 {
    if coefficient.is_nan() {
        0.0
    } else {
        coefficient.clamp(0.0, 1.0)
    }
}
