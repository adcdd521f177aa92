//! Tests for the droplet transient

mod wav_writer;

use rain_dsp::noise::droplet::*;
use rain_dsp::utils::random::{Random, RandomSource};
use rain_dsp::ProcessSpec;

use stub_random::SequenceRandom;

const SAMPLE_RATE: f64 = 48000.0;

fn prepared() -> DropletWave {
    let mut droplet = DropletWave::new();
    droplet.prepare(&ProcessSpec::new(SAMPLE_RATE, 512));
    droplet
}

/// Runs a droplet to completion, returning `(elapsed, output)` pairs.
fn run(droplet: &mut DropletWave) -> Vec<(f32, f32)> {
    let mut trace = Vec::new();
    while !droplet.finished() {
        let y = droplet.next();
        trace.push((droplet.elapsed(), y));
        assert!(trace.len() < SAMPLE_RATE as usize, "droplet never finished");
    }
    trace
}

#[test]
fn idle_until_reset() {
    let mut droplet = prepared();
    assert!(droplet.finished());
    for _ in 0..1000 {
        assert_eq!(droplet.next(), 0.0);
    }
    assert!(droplet.finished());
}

#[test]
fn reset_draws_ordered_windows() {
    let mut random = Random::new(3);
    let mut droplet = prepared();

    for n in 0..2000 {
        let interval = (n % 11) as f32 / 10.0;
        let frequency = (n % 7) as f32 / 6.0;
        droplet.reset(&mut random, 0.05, interval, frequency);

        let [d1, d2, d3] = droplet.offsets();
        assert!(0.0 <= d1 && d1 <= d2 && d2 <= d3);
        assert!(d1 <= 0.002 && (0.002..=0.006).contains(&d2) && (0.006..=0.012).contains(&d3));
        assert!((0.0..=0.05).contains(&droplet.onset()));
        assert!((3.0..=15.0).contains(&droplet.decay_exponent()));
        assert!((1000.0..=2000.0).contains(&droplet.tone_frequency()));
        assert!((0.0..=1.0).contains(&droplet.pan()));
    }
}

#[test]
fn reset_follows_draw_order() {
    let mut random = SequenceRandom::new(&[0.5, 0.25, 0.5, 0.5, 1.0, 0.0, 0.1]);
    let mut droplet = prepared();
    droplet.reset(&mut random, 0.02, 1.0, 1.0);

    assert_eq!(random.draws(), 7);
    assert!((droplet.onset() - 0.01).abs() < 1.0e-7);
    let [d1, d2, d3] = droplet.offsets();
    assert!((d1 - 0.0005).abs() < 1.0e-7);
    assert!((d2 - 0.004).abs() < 1.0e-7);
    assert!((d3 - 0.009).abs() < 1.0e-7);
    assert!((droplet.decay_exponent() - 15.0).abs() < 1.0e-5);
    assert!((droplet.tone_frequency() - 1000.0).abs() < 1.0e-3);
    assert!((droplet.pan() - 0.9).abs() < 1.0e-6);
}

#[test]
fn finishes_after_last_window() {
    let mut random = Random::new(99);
    let mut droplet = prepared();

    for _ in 0..200 {
        let interval = random.next_float();
        droplet.reset(&mut random, 0.1, interval, 0.5);
        assert!(!droplet.finished());

        let trace = run(&mut droplet);
        let (last, _) = *trace.last().unwrap();
        assert!(last > droplet.duration());
        assert!(trace[..trace.len() - 1].iter().all(|(t, _)| *t <= droplet.duration()));
        assert!(droplet.finished());
        assert_eq!(droplet.next(), 0.0);
    }
}

#[test]
fn silent_phases_are_exactly_zero() {
    let mut random = Random::new(17);
    let mut droplet = prepared();

    for _ in 0..200 {
        droplet.reset(&mut random, 0.03, 1.0, 1.0);
        let onset = droplet.onset();
        let [d1, d2, _] = droplet.offsets();

        for (t, y) in run(&mut droplet) {
            if t < onset || (t >= onset + d1 && t < onset + d2) {
                assert_eq!(y, 0.0, "t = {t}");
            }
        }
    }
}

#[test]
fn attack_reads_event_clock() {
    let mut random = SequenceRandom::new(&[0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
    let mut droplet = prepared();
    droplet.reset(&mut random, 0.02, 1.0, 0.0);

    let onset = droplet.onset();
    let [d1, _, _] = droplet.offsets();
    let mut attack_samples = 0;
    for (t, y) in run(&mut droplet) {
        if t >= onset && t < onset + d1 {
            assert_eq!(y, t.sin());
            attack_samples += 1;
        }
    }
    assert!(attack_samples > 0);
}

#[test]
fn ring_decays_inside_envelope() {
    let mut random = Random::new(23);
    let mut droplet = prepared();

    for _ in 0..200 {
        droplet.reset(&mut random, 0.01, 0.7, 1.0);
        let onset = droplet.onset();
        let [_, d2, d3] = droplet.offsets();
        let mut previous_envelope = f32::INFINITY;

        for (t, y) in run(&mut droplet) {
            if t >= onset + d2 && t < onset + d3 {
                let local = t - onset - d2;
                let envelope = droplet.decay_envelope(local);
                assert!(envelope < previous_envelope);
                assert!(y.abs() <= envelope / core::f32::consts::PI + 1.0e-6);
                previous_envelope = envelope;
            }
        }
    }
}

#[test]
fn droplet_train() {
    let mut random = Random::new(5);
    let mut droplet = prepared();
    let mut wav_data = Vec::new();

    for n in 0..40 {
        droplet.reset(&mut random, 0.02, (n % 5) as f32 / 4.0, (n % 3) as f32 / 2.0);
        wav_data.extend(run(&mut droplet).into_iter().map(|(_, y)| y));
        wav_data.extend(std::iter::repeat(0.0).take(2400));
    }

    assert!(wav_data.iter().any(|y| *y != 0.0));
    wav_writer::write("noise/droplets.wav", SAMPLE_RATE as u32, &wav_data).ok();
}
