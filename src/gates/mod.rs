// src/gates/mod.rs

//! Gate operators acting on sampled amplitudes.
//!
//! Every gate is a pure function `(amplitude, grid, params) -> amplitude'` with
//! output of the same length as the input. None of them renormalize. The grid is
//! assumed to describe `amplitude` point-for-point; sample `i` is taken to sit at
//! `grid.point(i)`.
//!
//! Two gates are knowingly approximate on a finite grid:
//! - [`displacement`] shifts by whole samples and wraps around the edges.
//! - [`squeezing`] resamples with zero-fill outside the grid and scales the norm by `s²`.
//!
//! Both conditions are surfaced as diagnostics by the simulation engine rather than
//! corrected here.

mod fft;
pub(crate) mod interpolate;

pub use fft::{fourier, inverse_fourier};

use crate::core::{FaqaError, Grid, Result};
use interpolate::linear_zero_fill;
use num_complex::Complex;

/// Number of samples `a` corresponds to on `grid`, rounded half-to-even.
pub fn displacement_shift(grid: &Grid, a: f64) -> i64 {
    (a / grid.step()).round_ties_even() as i64
}

/// Translates the sampled function by `a`: `ψ(x) → ψ(x - a)`.
///
/// Implemented as a circular shift by `round(a/dx)` samples; mass pushed past one
/// edge re-enters at the other. Total `sum(|ψ|²)` is preserved exactly.
pub fn displacement(amplitude: &[Complex<f64>], grid: &Grid, a: f64) -> Vec<Complex<f64>> {
    let mut out = amplitude.to_vec();
    let n = out.len();
    if n == 0 {
        return out;
    }
    let shift = displacement_shift(grid, a).rem_euclid(n as i64) as usize;
    out.rotate_right(shift);
    out
}

/// Probability fraction (of `sum(|ψ|²)`) that [`displacement`] by `a` carries across
/// a grid edge. Zero means the shift is free of wrap-around artifacts.
pub fn displacement_wrapped_fraction(amplitude: &[Complex<f64>], grid: &Grid, a: f64) -> f64 {
    let n = amplitude.len();
    let total: f64 = amplitude.iter().map(|c| c.norm_sqr()).sum();
    if n == 0 || total <= 0.0 {
        return 0.0;
    }
    let shift = displacement_shift(grid, a);
    let reach = shift.unsigned_abs().min(n as u64) as usize;
    // A right shift wraps the last `reach` samples; a left shift wraps the first `reach`.
    let wrapped = if shift >= 0 { &amplitude[n - reach..] } else { &amplitude[..reach] };
    wrapped.iter().map(|c| c.norm_sqr()).sum::<f64>() / total
}

/// Rescales the coordinate by `s`: resamples `ψ` at `x/s` and multiplies by
/// `sqrt(|s|)`.
///
/// The norm is not preserved. Resampling at `x/s` stretches `∫|ψ|²` by `|s|` and
/// the prefactor contributes another `|s|`, so a packet well inside the grid ends
/// with norm `s²`. Zero-fill outside the grid and interpolation error come on top
/// of that. `s == 0` yields the zero array.
pub fn squeezing(amplitude: &[Complex<f64>], grid: &Grid, s: f64) -> Vec<Complex<f64>> {
    let jacobian = s.abs().sqrt();
    (0..amplitude.len())
        .map(|i| linear_zero_fill(amplitude, grid, grid.point(i) / s) * jacobian)
        .collect()
}

/// Pointwise phase `exp(i·γ·x³)`. Modulus is untouched.
pub fn cubic_phase(amplitude: &[Complex<f64>], grid: &Grid, gamma: f64) -> Vec<Complex<f64>> {
    amplitude
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let x = grid.point(i);
            c * Complex::from_polar(1.0, gamma * x * x * x)
        })
        .collect()
}

/// Global phase `exp(i·φ)`.
pub fn phase(amplitude: &[Complex<f64>], phi: f64) -> Vec<Complex<f64>> {
    let rotor = Complex::from_polar(1.0, phi);
    amplitude.iter().map(|c| c * rotor).collect()
}

/// Beam-splitter style mix of two modes sampled on the same grid:
///
/// ```text
/// a =  cos θ·ψ1 + sin θ·ψ2
/// b = -sin θ·ψ1 + cos θ·ψ2
/// ```
///
/// # Errors
/// `DimensionMismatch` if the inputs differ in length.
pub fn two_mode_mix(
    psi1: &[Complex<f64>],
    psi2: &[Complex<f64>],
    theta: f64,
) -> Result<(Vec<Complex<f64>>, Vec<Complex<f64>>)> {
    if psi1.len() != psi2.len() {
        return Err(FaqaError::DimensionMismatch { expected: psi1.len(), found: psi2.len() });
    }
    let (sin, cos) = theta.sin_cos();
    Ok(psi1
        .iter()
        .zip(psi2)
        .map(|(&p1, &p2)| (p1 * cos + p2 * sin, p2 * cos - p1 * sin))
        .unzip())
}
