//! Per-sample linear ramps for values that change once per block.

/// Ramps from the value stored in `state` to a new target over `size` samples.
///
/// The reached value is written back to `state` when the interpolator is
/// dropped, so the next block starts where this one ended.
#[derive(Debug)]
pub struct ParameterInterpolator<'a> {
    state: &'a mut f32,
    value: f32,
    increment: f32,
}

impl<'a> ParameterInterpolator<'a> {
    pub fn new(state: &'a mut f32, new_value: f32, size: usize) -> Self {
        let value = *state;
        let increment = if size > 0 {
            (new_value - value) / (size as f32)
        } else {
            0.0
        };

        Self {
            state,
            value,
            increment,
        }
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        self.value += self.increment;
        self.value
    }
}

impl Drop for ParameterInterpolator<'_> {
    fn drop(&mut self) {
        *self.state = self.value;
    }
}
