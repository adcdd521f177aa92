//! Tests for the noise generators

mod wav_writer;

use rain_dsp::noise::pink_noise::PinkNoise;
use rain_dsp::noise::white_noise::WhiteNoise;
use rain_dsp::utils::random::{Random, RandomSource};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 24;

/// Ratio of first-difference energy to signal energy: 2.0 for white noise,
/// lower for signals tilted towards low frequencies.
fn difference_ratio(samples: &[f32]) -> f32 {
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    let energy: f32 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    let difference: f32 = samples.windows(2).map(|w| (w[1] - w[0]) * (w[1] - w[0])).sum();
    difference / energy
}

#[test]
fn random_stays_below_one() {
    let mut random = Random::new(0xdead_beef);
    for _ in 0..1_000_000 {
        let u = random.next_float();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn random_is_repeatable() {
    let mut a = Random::new(42);
    let mut b = Random::new(42);
    let mut c = Random::new(43);

    let a_values: Vec<f32> = (0..64).map(|_| a.next_float()).collect();
    let b_values: Vec<f32> = (0..64).map(|_| b.next_float()).collect();
    let c_values: Vec<f32> = (0..64).map(|_| c.next_float()).collect();

    assert_eq!(a_values, b_values);
    assert_ne!(a_values, c_values);
}

#[test]
fn shared_stream_through_reference() {
    let mut shared = Random::new(5);
    let mut reference = Random::new(5);

    let first = WhiteNoise::new(&mut shared).next();
    let second = shared.next_bipolar();

    assert_eq!(first, reference.next_bipolar());
    assert_eq!(second, reference.next_bipolar());
}

#[test]
fn white_noise() {
    let duration = 1.0;
    let mut noise = WhiteNoise::new(Random::new(1));
    let mut out = [0.0; BLOCK_SIZE];
    let mut wav_data = Vec::new();

    let blocks = (duration * SAMPLE_RATE as f32 / BLOCK_SIZE as f32) as usize;
    for _ in 0..blocks {
        noise.render(&mut out);
        wav_data.extend_from_slice(&out);
    }

    assert!(wav_data.iter().all(|x| (-1.0..1.0).contains(x)));
    let mean = wav_data.iter().sum::<f32>() / wav_data.len() as f32;
    assert!(mean.abs() < 0.01);
    let ratio = difference_ratio(&wav_data);
    assert!((ratio - 2.0).abs() < 0.05, "white difference ratio {ratio}");

    wav_writer::write("noise/white.wav", SAMPLE_RATE, &wav_data).ok();
}

#[test]
fn pink_noise() {
    let duration = 2.0;
    let mut noise = PinkNoise::new(Random::new(1));
    let mut out = [0.0; BLOCK_SIZE];
    let mut wav_data = Vec::new();

    let blocks = (duration * SAMPLE_RATE as f32 / BLOCK_SIZE as f32) as usize;
    for _ in 0..blocks {
        noise.render(&mut out);
        wav_data.extend_from_slice(&out);
    }

    assert!(wav_data.iter().all(|x| x.is_finite() && x.abs() < 2.0));
    let ratio = difference_ratio(&wav_data);
    assert!(ratio < 1.0, "pink difference ratio {ratio}");

    wav_writer::write("noise/pink.wav", SAMPLE_RATE, &wav_data).ok();
}

#[test]
fn pink_streams_are_independent() {
    let mut a = PinkNoise::new(Random::new(10));
    let mut b = PinkNoise::new(Random::new(11));

    let a_values: Vec<f32> = (0..48000).map(|_| a.next()).collect();
    let b_values: Vec<f32> = (0..48000).map(|_| b.next()).collect();
    let correlation: f32 = a_values.iter().zip(b_values.iter()).map(|(x, y)| x * y).sum();
    let energy_a: f32 = a_values.iter().map(|x| x * x).sum();
    let energy_b: f32 = b_values.iter().map(|x| x * x).sum();

    assert!(correlation.abs() < 0.5 * (energy_a * energy_b).sqrt());
}
