//! Offline rain render to a WAV file, with a slow parameter sweep.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use rain_dsp::{LayerKind, ParamId, Parameters, RainSynth};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 256;
const DURATION: f32 = 10.0;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed);

    let parameters = Parameters::new();
    let mut synth = RainSynth::new(seed);
    synth.prepare(SAMPLE_RATE as f64, BLOCK_SIZE).unwrap();

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    std::fs::create_dir_all("out").unwrap();
    let mut writer = WavWriter::create("out/rain.wav", spec).unwrap();

    let mut left = vec![0.0; BLOCK_SIZE];
    let mut right = vec![0.0; BLOCK_SIZE];
    let blocks = (DURATION * SAMPLE_RATE as f32 / BLOCK_SIZE as f32) as usize;

    for block in 0..blocks {
        // Heavier rain towards the end.
        let progress = block as f32 / blocks as f32;
        parameters.set_normalized(ParamId::DropletGain, 0.3 + 0.5 * progress);
        parameters.set(ParamId::StereoWidth, 0.4 + 0.6 * progress);

        synth.process(&parameters, &mut left, &mut right);

        for (l, r) in left.iter().zip(right.iter()) {
            writer.write_sample(*l).unwrap();
            writer.write_sample(*r).unwrap();
        }

        if block % 500 == 0 {
            let peaks = synth.layer_peaks();
            log::info!(
                "block {block}: mid {:.3} low {:.3} stereo {:.3} droplet {:.3}",
                peaks[LayerKind::MidBoil as usize],
                peaks[LayerKind::LowBoil as usize],
                peaks[LayerKind::StereoWidth as usize],
                peaks[LayerKind::Droplet as usize],
            );
        }
    }

    writer.finalize().unwrap();
    log::info!(
        "rendered {DURATION} s with {} droplets to out/rain.wav",
        synth.droplet_triggers()
    );
}
