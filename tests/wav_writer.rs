//! Writer for WAV files

#![allow(dead_code)]

use std::path::Path;

use hound::*;

/// Writes a mono signal as a stereo WAV file in 32-bit float format.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    sample_rate: u32,
    samples: &[f32],
) -> hound::Result<()> {
    write_stereo(filename, sample_rate, samples, samples)
}

/// Writes two channels as an interleaved WAV file in 32-bit float format.
pub fn write_stereo(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    sample_rate: u32,
    left: &[f32],
    right: &[f32],
) -> hound::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;

    for (l, r) in left.iter().zip(right.iter()) {
        writer.write_sample(*l)?;
        writer.write_sample(*r)?;
    }

    writer.finalize()
}
