// src/core/state.rs

use super::constants::faqa_constants::PI;
use super::error::{FaqaError, Result};
use super::grid::Grid;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Outcome of the normalization step applied when a state is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// The amplitude was rescaled so that `sum(|ψ|²)·dx == 1`.
    Nominal,
    /// The input carried no probability mass; normalization was skipped and the
    /// state is left as given (all zeros). Not an error.
    Degenerate,
}

/// A complex wavefunction sampled on a uniform grid.
///
/// Construction normalizes once to `sum(|ψ|²)·dx == 1`. Gates applied later do
/// not renormalize, so the norm may drift (see `gates::squeezing`).
/// `Clone` produces an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    grid: Grid,
    amplitude: Vec<Complex<f64>>,
    normalization: Normalization,
}

impl WaveState {
    /// Builds a state from raw samples and normalizes it.
    ///
    /// # Errors
    /// `DimensionMismatch` if `amplitude.len() != grid.len()`.
    pub fn new(grid: Grid, amplitude: Vec<Complex<f64>>) -> Result<Self> {
        if amplitude.len() != grid.len() {
            return Err(FaqaError::DimensionMismatch { expected: grid.len(), found: amplitude.len() });
        }
        let mut state = Self { grid, amplitude, normalization: Normalization::Degenerate };
        state.normalize();
        Ok(state)
    }

    /// Builds a state from real-valued samples.
    pub fn from_real(grid: Grid, samples: &[f64]) -> Result<Self> {
        Self::new(grid, samples.iter().map(|&re| Complex::new(re, 0.0)).collect())
    }

    /// Gaussian wave packet `exp(-(x-x0)²/(2σ²)) · exp(i·k0·x)` with the continuous
    /// prefactor `1/sqrt(sqrt(2π)·σ)`. The discrete normalization still runs on top.
    ///
    /// # Errors
    /// `InvalidParameter` if `sigma` is not finite and positive or `x0`/`k0` are not finite.
    pub fn gaussian(grid: Grid, x0: f64, sigma: f64, k0: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FaqaError::InvalidParameter {
                message: format!("gaussian width must be finite and positive, got {}", sigma),
            });
        }
        if !x0.is_finite() || !k0.is_finite() {
            return Err(FaqaError::InvalidParameter {
                message: format!("gaussian centre and wavenumber must be finite, got x0={}, k0={}", x0, k0),
            });
        }
        let prefactor = 1.0 / ((2.0 * PI).sqrt() * sigma).sqrt();
        let amplitude = grid
            .iter()
            .map(|x| {
                let u = (x - x0) / sigma;
                prefactor * Complex::new(-0.5 * u * u, k0 * x).exp()
            })
            .collect();
        Self::new(grid, amplitude)
    }

    fn normalize(&mut self) {
        let mass = self.norm();
        if mass > 0.0 {
            let scale = 1.0 / mass.sqrt();
            self.amplitude.iter_mut().for_each(|c| *c *= scale);
            self.normalization = Normalization::Nominal;
        } else {
            self.normalization = Normalization::Degenerate;
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid spacing.
    pub fn dx(&self) -> f64 {
        self.grid.step()
    }

    pub fn amplitude(&self) -> &[Complex<f64>] {
        &self.amplitude
    }

    /// Mutable access for in-place pointwise updates. Length is fixed.
    pub fn amplitude_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitude
    }

    /// Assigns a gate's output back to the state. Does not renormalize.
    pub fn set_amplitude(&mut self, amplitude: Vec<Complex<f64>>) -> Result<()> {
        if amplitude.len() != self.grid.len() {
            return Err(FaqaError::DimensionMismatch { expected: self.grid.len(), found: amplitude.len() });
        }
        self.amplitude = amplitude;
        Ok(())
    }

    /// Replaces grid and amplitude together, e.g. when moving to the wavenumber axis.
    pub(crate) fn rebase(&mut self, grid: Grid, amplitude: Vec<Complex<f64>>) -> Result<()> {
        if amplitude.len() != grid.len() {
            return Err(FaqaError::DimensionMismatch { expected: grid.len(), found: amplitude.len() });
        }
        self.grid = grid;
        self.amplitude = amplitude;
        Ok(())
    }

    /// How construction-time normalization went.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn is_degenerate(&self) -> bool {
        self.normalization == Normalization::Degenerate
    }

    /// Current discrete mass `sum(|ψ|²)·dx`.
    pub fn norm(&self) -> f64 {
        self.amplitude.iter().map(|c| c.norm_sqr()).sum::<f64>() * self.grid.step()
    }

    /// `|ψ|²` per sample.
    pub fn probability_density(&self) -> Vec<f64> {
        self.amplitude.iter().map(|c| c.norm_sqr()).collect()
    }

    /// `sum(x·|ψ|²)·dx` as a plain Riemann sum.
    ///
    /// Differs slightly from `measurement::expectation`, which integrates with the
    /// trapezoid rule; the two only agree as the grid is refined.
    pub fn expectation_position(&self) -> f64 {
        self.grid
            .iter()
            .zip(&self.amplitude)
            .map(|(x, c)| x * c.norm_sqr())
            .sum::<f64>()
            * self.grid.step()
    }

    /// `sum(conj(ψ)·φ)·dx`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the two states are not sampled on the same grid.
    pub fn overlap(&self, other: &WaveState) -> Result<Complex<f64>> {
        if !self.grid.is_compatible(&other.grid) {
            return Err(FaqaError::DimensionMismatch { expected: self.grid.len(), found: other.grid.len() });
        }
        let sum = self
            .amplitude
            .iter()
            .zip(&other.amplitude)
            .fold(Complex::zero(), |acc, (a, b)| acc + a.conj() * *b);
        Ok(sum * self.grid.step())
    }
}

impl fmt::Display for WaveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WaveState[{}, norm={:.6}", self.grid, self.norm())?;
        if self.is_degenerate() {
            write!(f, ", degenerate")?;
        }
        write!(f, "]")
    }
}
