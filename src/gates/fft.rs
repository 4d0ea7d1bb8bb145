// src/gates/fft.rs

//! Centred, unitary discrete Fourier transform.
//!
//! Both directions shift the zero-frequency sample to the array centre on the
//! way in and out (`fftshift ∘ DFT ∘ ifftshift`) and scale by `1/sqrt(N)`, so
//! `sum(|ψ|²)` is preserved and `inverse_fourier(fourier(ψ)) == ψ` for every length.

use num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

/// Rotates so that index `⌊N/2⌋` (the centre) moves to index 0.
fn ifftshift(buffer: &mut [Complex<f64>]) {
    let half = buffer.len() / 2;
    buffer.rotate_left(half);
}

/// Rotates so that index 0 moves to index `⌊N/2⌋`.
fn fftshift(buffer: &mut [Complex<f64>]) {
    let half = buffer.len() / 2;
    buffer.rotate_right(half);
}

fn centred_transform(amplitude: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
    let n = amplitude.len();
    if n == 0 {
        return Vec::new();
    }
    let mut buffer = amplitude.to_vec();
    ifftshift(&mut buffer);

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft(n, direction);
    fft.process(&mut buffer);

    fftshift(&mut buffer);
    // rustfft leaves both directions unnormalized.
    let scale = 1.0 / (n as f64).sqrt();
    buffer.iter_mut().for_each(|c| *c *= scale);
    buffer
}

/// Unitary centred forward transform into wavenumber order.
///
/// Output index `i` corresponds to wavenumber `(i - ⌊N/2⌋)·2π/(N·dx)`, see
/// `Grid::conjugate`.
pub fn fourier(amplitude: &[Complex<f64>]) -> Vec<Complex<f64>> {
    centred_transform(amplitude, FftDirection::Forward)
}

/// Exact inverse of [`fourier`].
pub fn inverse_fourier(amplitude: &[Complex<f64>]) -> Vec<Complex<f64>> {
    centred_transform(amplitude, FftDirection::Inverse)
}
