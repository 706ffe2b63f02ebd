//! Direct discrete Fourier transform of a uniformly sampled complex signal.
//!
//! O(N²) summation, deliberately: path lengths here are a few hundred
//! samples and the direct form keeps the addition order deterministic, so
//! round-trip reconstruction is bit-stable across runs. Swapping in an FFT
//! would reorder the reduction and invalidate the invertibility tests.

use std::f64::consts::TAU;

use num_complex::Complex64;

/// Forward transform: `X[k] = (1/N) Σ_n x[n] · e^{-i·2πnk/N}`.
pub fn dft(samples: &[Complex64]) -> Vec<Complex64> {
    let n = samples.len();
    let scale = 1.0 / n as f64;
    (0..n)
        .map(|k| {
            let mut acc = Complex64::new(0.0, 0.0);
            for (j, x) in samples.iter().enumerate() {
                let angle = -TAU * (j as f64) * (k as f64) / n as f64;
                acc += x * Complex64::from_polar(1.0, angle);
            }
            acc * scale
        })
        .collect()
}

/// Inverse transform: `x[n] = Σ_k X[k] · e^{i·2πkn/N}` (no scaling; the
/// 1/N lives in the forward direction).
pub fn inverse_dft(coefficients: &[Complex64]) -> Vec<Complex64> {
    let n = coefficients.len();
    (0..n)
        .map(|j| {
            let mut acc = Complex64::new(0.0, 0.0);
            for (k, c) in coefficients.iter().enumerate() {
                let angle = TAU * (k as f64) * (j as f64) / n as f64;
                acc += c * Complex64::from_polar(1.0, angle);
            }
            acc
        })
        .collect()
}

/// Maximum absolute deviation between `samples` and the inverse transform
/// of `coefficients`. Feeds the numeric-instability diagnostic.
pub fn reconstruction_error(samples: &[Complex64], coefficients: &[Complex64]) -> f64 {
    inverse_dft(coefficients)
        .iter()
        .zip(samples)
        .map(|(r, s)| (r - s).norm())
        .fold(0.0, f64::max)
}
