//! Unit conversions.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Level treated as silence by [`decibels_to_gain`].
pub const MINUS_INFINITY_DB: f32 = -100.0;

/// Converts decibels to a linear gain factor, `10^(db / 20)`.
#[inline]
pub fn decibels_to_gain(decibels: f32) -> f32 {
    if decibels > MINUS_INFINITY_DB {
        10.0_f32.powf(decibels * 0.05)
    } else {
        0.0
    }
}

/// Converts a linear gain factor to decibels.
#[inline]
pub fn gain_to_decibels(gain: f32) -> f32 {
    if gain > 0.0 {
        (20.0 * gain.log10()).max(MINUS_INFINITY_DB)
    } else {
        MINUS_INFINITY_DB
    }
}

/// Bipolar random gain excursion around unity.
///
/// `range_db` is the largest deviation, `u` a uniform draw in 0.0..1.0.
#[inline]
pub fn random_gain(range_db: f32, u: f32) -> f32 {
    decibels_to_gain(range_db * (2.0 * u - 1.0))
}
