//! Utility functions.
//!
//! Small signal-processing building blocks shared by the noise sources,
//! oscillators and layers.

pub mod filter;
pub mod pan;
pub mod parameter_interpolator;
pub mod random;
pub mod smoother;
pub mod units;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Reads a single-cycle table with linear interpolation.
///
/// `table` holds `size + 1` points, the last one being a copy of the first.
/// `phase` is wrapped into 0.0..1.0.
#[inline]
pub fn interpolate_wrap(table: &[f32], mut phase: f32, size: usize) -> f32 {
    phase -= phase.floor();
    let index = phase * size as f32;
    let index_integral = (index as usize).min(size - 1);
    let index_fractional = index - (index_integral as f32);
    let a = table[index_integral];
    let b = table[index_integral + 1];

    a + (b - a) * index_fractional
}

#[inline]
pub fn one_pole(out: &mut f32, in_: f32, coefficient: f32) {
    *out += coefficient * (in_ - *out);
}

/// Linearly maps `value` from the range `from_1..to_1` onto `from_2..to_2`.
#[inline]
pub fn remap(value: f32, from_1: f32, to_1: f32, from_2: f32, to_2: f32) -> f32 {
    (value - from_1) / (to_1 - from_1) * (to_2 - from_2) + from_2
}

/// Largest absolute sample value.
#[inline]
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0, |acc, sample| acc.max(sample.abs()))
}

/// Multiplies every sample by `gain`.
#[inline]
pub fn apply_gain(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample *= gain;
    }
}

/// Adds `source` onto `destination`, sample by sample.
#[inline]
pub fn add_into(destination: &mut [f32], source: &[f32]) {
    for (out_sample, in_sample) in destination.iter_mut().zip(source.iter()) {
        *out_sample += *in_sample;
    }
}
