//! Message assembler: bits → bytes → characters.

use crate::protocol::BITS_PER_CHAR;

/// Pack bits MSB-first into bytes. A trailing group shorter than 8 bits is dropped.
pub fn pack_bytes(bits: &[bool]) -> Vec<u8> {
    let leftover = bits.len() % BITS_PER_CHAR;
    if leftover > 0 {
        log::warn!("dropping {leftover} bits after the last whole byte");
    }
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| group.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

/// Map each byte to the character with the same code point.
///
/// Every value is accepted: 0x80..=0xFF become U+0080..=U+00FF.
pub fn bytes_to_message(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Assemble the decoded message from per-chunk bits in chunk order.
pub fn assemble(bits: &[bool]) -> String {
    bytes_to_message(&pack_bytes(bits))
}

/// Unpack bytes into bits MSB-first (inverse of [`pack_bytes`]).
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&b| (0..BITS_PER_CHAR).rev().map(move |i| (b >> i) & 1 == 1))
        .collect()
}
