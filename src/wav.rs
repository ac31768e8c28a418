//! WAV loading via `hound`: container → mono f32 samples at the native rate.

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader};

/// Decoded audio: mono samples in `[-1, 1]` plus the file's sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl Signal {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Load a WAV file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Signal, crate::Error> {
    let reader = WavReader::open(path.as_ref())?;
    decode(reader)
}

/// Load WAV data from any reader.
pub fn read<R: Read>(reader: R) -> Result<Signal, crate::Error> {
    decode(WavReader::new(reader)?)
}

fn decode<R: Read>(reader: WavReader<R>) -> Result<Signal, crate::Error> {
    let spec = reader.spec();
    log::debug!(
        "wav: {} Hz, {} ch, {} bit {:?}",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader.into_samples::<f32>().collect::<Result<_, _>>()?,
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = 1.0 / (1u64 << (bits - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| (v as f64 * scale) as f32))
                .collect::<Result<_, _>>()?
        }
        (format, bits) => {
            return Err(crate::Error::UnsupportedFormat {
                format: format!("{format:?}"),
                bits,
            })
        }
    };

    let samples = downmix(&interleaved, spec.channels as usize);
    Ok(Signal {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Average interleaved frames down to one channel. Incomplete trailing frames are dropped.
fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
