//! Uniform white noise.

use crate::utils::random::RandomSource;

/// Bipolar white noise drawn from a [`RandomSource`].
///
/// Wrap a `&mut` to a shared generator to draw from a stream owned elsewhere.
#[derive(Debug, Default, Clone)]
pub struct WhiteNoise<R> {
    random: R,
}

impl<R: RandomSource> WhiteNoise<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Returns a value in the range -1.0..1.0.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        self.random.next_bipolar()
    }

    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next();
        }
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }
}
