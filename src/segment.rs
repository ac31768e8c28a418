//! Segmenter: split a signal into fixed-length, non-overlapping chunks.

use std::slice::ChunksExact;

/// Split `signal` into `floor(len / chunk_size)` chunks of exactly
/// `chunk_size` samples. Trailing samples are never yielded.
pub fn chunks(signal: &[f32], chunk_size: usize) -> Result<ChunksExact<'_, f32>, crate::Error> {
    if chunk_size == 0 {
        return Err(crate::Error::InvalidChunkSize);
    }
    let iter = signal.chunks_exact(chunk_size);
    let dropped = iter.remainder().len();
    if dropped > 0 {
        log::warn!("discarding {dropped} trailing samples beyond the last whole chunk");
    }
    Ok(iter)
}

/// Number of whole chunks in a signal of `len` samples (0 for `chunk_size == 0`).
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.checked_div(chunk_size).unwrap_or(0)
}

/// Chunk length when a signal of `len` samples is cut into `segments` equal parts.
pub fn chunk_size_for_segments(len: usize, segments: usize) -> Result<usize, crate::Error> {
    if segments == 0 {
        return Err(crate::Error::InvalidSegmentCount);
    }
    Ok(len / segments)
}
