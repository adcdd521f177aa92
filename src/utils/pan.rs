//! Quarter-cosine pan law.

#[allow(unused_imports)]
use num_traits::float::Float;

const TWO_PI: f32 = core::f32::consts::TAU;

/// Maps a stereo position to `(left, right)` channel gains.
///
/// `pan` runs from 0.0 (left) to 1.0 (right). Note the left gain is negative
/// below full right: `left = cos((pan / 4 - 1/2) * 2pi)`,
/// `right = cos((pan / 4 - 1/4) * 2pi)`.
#[inline]
pub fn cos_pan(pan: f32) -> (f32, f32) {
    let pan = pan.clamp(0.0, 1.0);
    let left = ((pan * 0.25 - 0.5) * TWO_PI).cos();
    let right = ((pan * 0.25 - 0.25) * TWO_PI).cos();

    (left, right)
}
