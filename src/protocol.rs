/// Additive guard inside the log-magnitude step: `ln(|X| + EPSILON)`.
///
/// Keeps zero-magnitude bins (silence, DC-free frames) finite.
pub const EPSILON: f64 = 1e-6;

/// Bits per decoded character (one byte, MSB first).
pub const BITS_PER_CHAR: usize = 8;

/// Segment count used to derive the chunk size from the signal length.
pub const DEFAULT_SEGMENTS: usize = 256;

/// Echo delay (quefrency, in samples) that encodes a `0` bit.
pub const DEFAULT_DELAY0: usize = 48;

/// Echo delay (quefrency, in samples) that encodes a `1` bit.
pub const DEFAULT_DELAY1: usize = 57;

/// Number of whole characters carried by `num_chunks` chunks.
pub fn chars_for_chunks(num_chunks: usize) -> usize {
    num_chunks / BITS_PER_CHAR
}
