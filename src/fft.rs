//! FFT wrapper around `rustfft` for computing the real cepstrum.

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::protocol::EPSILON;

/// Real-cepstrum analyzer for frames of a fixed length.
///
/// Holds the forward and inverse plans for one frame length. Plans are
/// immutable and `Send + Sync`, so one analyzer can be shared across threads;
/// every call works on its own buffers.
#[derive(Clone)]
pub struct Cepstrum {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl std::fmt::Debug for Cepstrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cepstrum").field("len", &self.len).finish()
    }
}

impl Cepstrum {
    /// Plan both transforms for frames of `len` samples.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            len,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    /// Frame length this analyzer was planned for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compute the real cepstrum of `samples`.
    ///
    /// `ifft(ln(|fft(x)| + EPSILON)).re`, with the inverse scaled by `1/N`
    /// so values match the usual numpy convention.
    pub fn compute(&self, samples: &[f32]) -> Vec<f64> {
        debug_assert_eq!(samples.len(), self.len, "frame length mismatch");
        let n = self.len;
        if n == 0 {
            return Vec::new();
        }

        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .map(|&s| Complex::new(s as f64, 0.0))
            .collect();
        self.forward.process(&mut buffer);

        // Log-magnitude spectrum is real; reuse the buffer for the inverse pass.
        for c in buffer.iter_mut() {
            *c = Complex::new((c.norm() + EPSILON).ln(), 0.0);
        }
        self.inverse.process(&mut buffer);

        let scale = 1.0 / n as f64;
        buffer.iter().map(|c| c.re * scale).collect()
    }
}

/// One-off real cepstrum of an arbitrary-length frame.
///
/// Plans on every call; use [`Cepstrum`] when analyzing many frames.
pub fn real_cepstrum(samples: &[f32]) -> Vec<f64> {
    Cepstrum::new(samples.len()).compute(samples)
}
