//! Periodic control-rate oscillators.

pub mod wavetable_oscillator;
