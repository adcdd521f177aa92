//! Tests for the wavetable oscillator

mod modulation;
mod wav_writer;

use rain_dsp::oscillator::wavetable_oscillator::*;

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZE: usize = 24;
const TABLE_TOLERANCE: f32 = 1.0e-3;

fn prepared(frequency: f32) -> WavetableOscillator {
    let mut osc = WavetableOscillator::sine();
    osc.prepare(SAMPLE_RATE);
    osc.set_frequency(frequency);
    osc
}

#[test]
fn sine_table_covers_one_period() {
    let table = sine_table();
    assert_eq!(table.len(), SINE_TABLE_SIZE + 1);
    assert_eq!(table[0], 0.0);
    assert_eq!(table[SINE_TABLE_SIZE], table[0]);
    assert!((table[SINE_TABLE_SIZE / 4] - 1.0).abs() < 1.0e-6);
    assert!((table[3 * SINE_TABLE_SIZE / 4] + 1.0).abs() < 1.0e-6);
}

#[test]
fn output_follows_sine() {
    let frequency = 440.0;
    let mut osc = prepared(frequency);

    for n in 0..480 {
        let expected = (core::f32::consts::TAU * frequency * n as f32 / SAMPLE_RATE).sin();
        let y = osc.process_sample(0.0);
        assert!((y - expected).abs() < TABLE_TOLERANCE, "sample {n}: {y} vs {expected}");
    }
}

#[test]
fn output_is_periodic() {
    // 480 Hz at 48 kHz repeats every 100 samples.
    let mut osc = prepared(480.0);
    let mut out = vec![0.0; 1000];
    osc.render(&mut out);

    for n in 0..900 {
        assert!((out[n] - out[n + 100]).abs() < TABLE_TOLERANCE);
    }
}

#[test]
fn input_is_added_to_waveform() {
    let mut a = prepared(3.0);
    let mut b = prepared(3.0);

    for n in 0..100 {
        let offset = n as f32 * 0.01 - 0.5;
        assert_eq!(a.process_sample(offset), b.process_sample(0.0) + offset);
    }
}

#[test]
fn frequency_change_keeps_phase() {
    let mut osc = prepared(2.0);
    let mut wav_data = Vec::new();
    let mut out = [0.0; BLOCK_SIZE];
    let blocks = 4000;

    let mut previous = osc.process_sample(0.0);
    for n in 0..blocks {
        let frequency = 2.0 + 38.0 * (0.5 + 0.5 * modulation::triangle(n, blocks, 3.0));
        let phase = osc.phase();
        osc.set_frequency(frequency);
        assert_eq!(osc.phase(), phase);

        osc.render(&mut out);
        let max_step = core::f32::consts::TAU * frequency / SAMPLE_RATE + TABLE_TOLERANCE;
        for y in out.iter() {
            assert!((y - previous).abs() <= max_step);
            previous = *y;
        }
        wav_data.extend_from_slice(&out);
    }

    wav_writer::write("oscillator/lfo_sweep.wav", SAMPLE_RATE as u32, &wav_data).ok();
}

#[test]
fn advance_skips_samples() {
    let mut stepped = prepared(7.0);
    let mut skipped = prepared(7.0);

    for _ in 0..511 {
        stepped.process_sample(0.0);
    }
    skipped.advance(511);

    assert!((stepped.phase() - skipped.phase()).abs() < 1.0e-4);
    assert!((stepped.process_sample(0.0) - skipped.process_sample(0.0)).abs() < TABLE_TOLERANCE);
}

#[test]
fn custom_waveform() {
    let mut osc = WavetableOscillator::sine();
    osc.initialise(|x| x.cos(), 64);
    osc.prepare(SAMPLE_RATE);
    osc.set_frequency(SAMPLE_RATE / 4.0);

    let out: Vec<f32> = (0..8).map(|_| osc.process_sample(0.0)).collect();
    let expected = [1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0];
    for (y, e) in out.iter().zip(expected) {
        assert!((y - e).abs() < 1.0e-5, "{out:?}");
    }
}

#[test]
fn frequency_is_clamped() {
    let mut osc = prepared(1.0e9);
    let y = osc.process_sample(0.0);
    assert!(y.is_finite());
    assert!(osc.phase() <= MAX_FREQUENCY);

    osc.set_frequency(f32::NAN);
    assert_eq!(osc.frequency(), 0.0);
    let phase = osc.phase();
    osc.process_sample(0.0);
    assert_eq!(osc.phase(), phase);

    osc.set_frequency(-10.0);
    assert_eq!(osc.frequency(), 0.0);
}
