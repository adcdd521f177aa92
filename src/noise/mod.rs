//! Noise sources and stochastic transients.

pub mod droplet;
pub mod pink_noise;
pub mod white_noise;
