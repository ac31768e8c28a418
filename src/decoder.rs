//! Decoder: f32 audio samples → bits (cepstral echo detection per chunk).

use crate::fft::Cepstrum;
use crate::protocol::*;
use crate::segment;

/// Decoding parameters: chunk length and the two echo delays.
///
/// Plain value; all decoding functions borrow it and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Samples per chunk (one bit per chunk).
    pub chunk_size: usize,
    /// Quefrency of the echo that encodes `0`.
    pub delay0: usize,
    /// Quefrency of the echo that encodes `1`.
    pub delay1: usize,
}

impl DecoderConfig {
    pub fn new(chunk_size: usize, delay0: usize, delay1: usize) -> Self {
        Self {
            chunk_size,
            delay0,
            delay1,
        }
    }

    /// Derive the chunk size by cutting `signal_len` samples into `segments`
    /// equal parts, using the default delays.
    pub fn for_segments(signal_len: usize, segments: usize) -> Result<Self, crate::Error> {
        let chunk_size = segment::chunk_size_for_segments(signal_len, segments)?;
        Ok(Self::new(chunk_size, DEFAULT_DELAY0, DEFAULT_DELAY1))
    }

    /// Same chunk size with `delay0` and `delay1` exchanged.
    pub fn swapped(&self) -> Self {
        Self::new(self.chunk_size, self.delay1, self.delay0)
    }

    /// Check the configuration before any chunk is touched.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.chunk_size == 0 {
            return Err(crate::Error::InvalidChunkSize);
        }
        for delay in [self.delay0, self.delay1] {
            if delay >= self.chunk_size {
                return Err(crate::Error::DelayOutOfRange {
                    delay,
                    chunk_size: self.chunk_size,
                });
            }
        }
        Ok(())
    }
}

/// Bit carried by one chunk: `true` iff the cepstrum at `delay1` is strictly
/// greater than at `delay0`. Equal values decode to `false`.
///
/// Both delays must index into `cepstrum`; [`DecoderConfig::validate`]
/// guarantees this for cepstra of `chunk_size` length.
pub fn extract_bit(cepstrum: &[f64], config: &DecoderConfig) -> bool {
    cepstrum[config.delay1] > cepstrum[config.delay0]
}

fn decode_chunk(analyzer: &Cepstrum, chunk: &[f32], config: &DecoderConfig) -> bool {
    let rceps = analyzer.compute(chunk);
    let bit = extract_bit(&rceps, config);
    log::trace!(
        "rceps[{}]={:.6} rceps[{}]={:.6} -> {}",
        config.delay0,
        rceps[config.delay0],
        config.delay1,
        rceps[config.delay1],
        bit as u8
    );
    bit
}

/// Decode one bit per whole chunk of `signal`, in chunk order.
pub fn decode_bits(signal: &[f32], config: &DecoderConfig) -> Result<Vec<bool>, crate::Error> {
    config.validate()?;
    let chunks = segment::chunks(signal, config.chunk_size)?;
    log::debug!(
        "decoding {} chunks of {} samples (delays {}/{})",
        chunks.len(),
        config.chunk_size,
        config.delay0,
        config.delay1
    );

    let analyzer = Cepstrum::new(config.chunk_size);

    #[cfg(feature = "parallel")]
    let bits = {
        use rayon::prelude::*;
        // Indexed parallel iterator: collect() keeps chunk order.
        signal[..chunks.len() * config.chunk_size]
            .par_chunks_exact(config.chunk_size)
            .map(|chunk| decode_chunk(&analyzer, chunk, config))
            .collect::<Vec<bool>>()
    };

    #[cfg(not(feature = "parallel"))]
    let bits = chunks
        .map(|chunk| decode_chunk(&analyzer, chunk, config))
        .collect::<Vec<bool>>();

    log::debug!(
        "decoded {} bits ({} characters)",
        bits.len(),
        chars_for_chunks(bits.len())
    );
    Ok(bits)
}
