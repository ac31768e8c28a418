//! Echo-hiding message recovery from audio via real-cepstrum analysis.
//!
//! The signal is cut into equal chunks, one hidden bit per chunk. Each bit was
//! embedded by adding a faint echo at one of two delays; the decoder computes
//! the real cepstrum of every chunk and reads `1` when the cepstrum at
//! `delay1` beats the one at `delay0`. Bits are packed MSB-first into bytes,
//! and each byte becomes the character with that code point.
//!
//! # Example
//!
//! ```
//! // Silence carries no echo; 16 chunks still decode to 2 characters.
//! let signal = vec![0.0f32; 16 * 256];
//! let message = echo_rs::decode(&signal, 256, 48, 57).unwrap();
//! assert_eq!(message.chars().count(), 2);
//!
//! assert!(echo_rs::decode(&signal, 256, 256, 57).is_err());
//! ```

pub mod protocol;
pub mod segment;
pub mod fft;
pub mod decoder;
pub mod message;
pub mod wav;

pub use decoder::{decode_bits, DecoderConfig};

/// Decode the message hidden in `signal`.
///
/// `chunk_size`: samples per bit. `delay0` / `delay1`: echo delays (in
/// samples) for `0` and `1` bits; both must be below `chunk_size`.
///
/// Returns one character per 8 whole chunks. A signal too short for a single
/// character yields an empty string.
pub fn decode(
    signal: &[f32],
    chunk_size: usize,
    delay0: usize,
    delay1: usize,
) -> Result<String, Error> {
    decode_with(signal, &DecoderConfig::new(chunk_size, delay0, delay1))
}

/// Decode the message hidden in `signal` with an explicit configuration.
pub fn decode_with(signal: &[f32], config: &DecoderConfig) -> Result<String, Error> {
    let bits = decoder::decode_bits(signal, config)?;
    Ok(message::assemble(&bits))
}

/// Decode the hidden payload as raw bytes, skipping the character mapping.
pub fn decode_bytes(signal: &[f32], config: &DecoderConfig) -> Result<Vec<u8>, Error> {
    let bits = decoder::decode_bits(signal, config)?;
    Ok(message::pack_bytes(&bits))
}

/// Errors returned by decode and load operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid chunk size: 0 (must be at least 1)")]
    InvalidChunkSize,

    #[error("delay {delay} out of range for chunk size {chunk_size}")]
    DelayOutOfRange { delay: usize, chunk_size: usize },

    #[error("invalid segment count: 0 (must be at least 1)")]
    InvalidSegmentCount,

    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("unsupported wav sample format: {format} {bits}-bit")]
    UnsupportedFormat { format: String, bits: u16 },
}

impl Error {
    /// True for bad decoding parameters, as opposed to audio loading failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::InvalidChunkSize | Error::DelayOutOfRange { .. } | Error::InvalidSegmentCount
        )
    }
}
