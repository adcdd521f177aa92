//! Uniform random sources.
//!
//! Every stochastic component draws from a [`RandomSource`] handed to it by
//! its owner, so a synth can be driven by a seeded generator for repeatable
//! renders or by an entropy-seeded one in production.

/// Source of uniformly distributed values.
pub trait RandomSource {
    /// Returns a value in the range 0.0..1.0.
    fn next_float(&mut self) -> f32;

    /// Returns a value in the range -1.0..1.0.
    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        self.next_float() * 2.0 - 1.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }
}

/// Fast 32-bit linear congruential generator.
#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl RandomSource for Random {
    #[inline]
    fn next_float(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly, keeping the result below 1.0.
        (self.get_word() >> 8) as f32 * (1.0 / 16_777_216.0)
    }
}

/// Generator seeded from operating system entropy.
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct EntropyRandom {
    rng: rand::rngs::SmallRng,
}

#[cfg(feature = "rand")]
impl EntropyRandom {
    pub fn new() -> Self {
        use rand::SeedableRng;

        Self {
            rng: rand::rngs::SmallRng::from_entropy(),
        }
    }
}

#[cfg(feature = "rand")]
impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rand")]
impl RandomSource for EntropyRandom {
    #[inline]
    fn next_float(&mut self) -> f32 {
        use rand::Rng;

        self.rng.gen::<f32>()
    }
}
