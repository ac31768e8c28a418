//! Test support: deterministic noise and a minimal echo-hiding encoder.
#![allow(dead_code)]

use echo_rs::message::unpack_bits;

pub const CHUNK: usize = 1024;
pub const DELAY0: usize = 48;
pub const DELAY1: usize = 57;
pub const ECHO_GAIN: f32 = 0.5;

/// LCG PRNG → uniform [0,1).
pub fn lcg(state: &mut u32) -> f32 {
    *state = state.wrapping_mul(1103515245).wrapping_add(12345);
    (*state >> 16) as f32 / 65536.0
}

/// Box-Muller normal variate from LCG.
pub fn normal(state: &mut u32) -> f32 {
    let u1 = lcg(state).max(1e-10);
    let u2 = lcg(state);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}

/// `n` samples of white Gaussian noise, scaled to roughly ±0.3.
pub fn noise(n: usize, state: &mut u32) -> Vec<f32> {
    (0..n).map(|_| 0.1 * normal(state)).collect()
}

/// `x[i] + gain * x[i - delay]`: the frame plus a faint delayed copy of itself.
pub fn add_echo(frame: &[f32], delay: usize, gain: f32) -> Vec<f32> {
    frame
        .iter()
        .enumerate()
        .map(|(i, &s)| if i >= delay { s + gain * frame[i - delay] } else { s })
        .collect()
}

/// One noise chunk per bit, echoed at `delay1` for `1` and `delay0` for `0`.
pub fn encode_bits(bits: &[bool], chunk_size: usize, delay0: usize, delay1: usize, seed: u32) -> Vec<f32> {
    let mut state = seed;
    let mut out = Vec::with_capacity(bits.len() * chunk_size);
    for &bit in bits {
        let delay = if bit { delay1 } else { delay0 };
        out.extend(add_echo(&noise(chunk_size, &mut state), delay, ECHO_GAIN));
    }
    out
}

/// Reference encoder for byte messages with the default test layout.
pub fn encode_message(message: &[u8], seed: u32) -> Vec<f32> {
    encode_bits(&unpack_bits(message), CHUNK, DELAY0, DELAY1, seed)
}
