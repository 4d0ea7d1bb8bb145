// src/measurement/mod.rs

//! Observables and sampling on sampled amplitudes.
//!
//! Integrals here use the trapezoid rule over the grid, unlike
//! `WaveState::expectation_position` which is a plain Riemann sum. Results agree
//! only as the grid is refined.

use crate::core::{FaqaError, Grid, Result};
use crate::gates::fourier;
use num_complex::Complex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position-space observables supported by [`expectation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observable {
    /// `x`
    Position,
    /// `x²`
    PositionSquared,
}

impl Observable {
    fn weight(self, x: f64) -> f64 {
        match self {
            Observable::Position => x,
            Observable::PositionSquared => x * x,
        }
    }
}

impl FromStr for Observable {
    type Err = FaqaError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "x" | "position" => Ok(Observable::Position),
            "x2" | "position_squared" => Ok(Observable::PositionSquared),
            other => Err(FaqaError::UnsupportedOperator { tag: other.to_string() }),
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observable::Position => write!(f, "x"),
            Observable::PositionSquared => write!(f, "x2"),
        }
    }
}

/// Trapezoid rule for samples `y` on a uniform grid with spacing `dx`.
pub fn trapezoid(y: &[f64], dx: f64) -> f64 {
    match y {
        [] | [_] => 0.0,
        [first, .., last] => (y.iter().sum::<f64>() - 0.5 * (first + last)) * dx,
    }
}

fn require_grid_len(amplitude: &[Complex<f64>], grid: &Grid) -> Result<()> {
    if amplitude.len() != grid.len() {
        return Err(FaqaError::DimensionMismatch { expected: grid.len(), found: amplitude.len() });
    }
    Ok(())
}

/// `∫ O(x)·|ψ(x)|² dx` by the trapezoid rule.
///
/// # Errors
/// `DimensionMismatch` if `amplitude` and `grid` differ in length.
pub fn expectation(amplitude: &[Complex<f64>], grid: &Grid, observable: Observable) -> Result<f64> {
    require_grid_len(amplitude, grid)?;
    let weighted: Vec<f64> = amplitude
        .iter()
        .enumerate()
        .map(|(i, c)| observable.weight(grid.point(i)) * c.norm_sqr())
        .collect();
    Ok(trapezoid(&weighted, grid.step()))
}

/// [`expectation`] selected by a textual tag (`"x"`, `"x2"`, ...).
///
/// # Errors
/// `UnsupportedOperator` for any tag outside the recognised set.
pub fn expectation_by_tag(amplitude: &[Complex<f64>], grid: &Grid, tag: &str) -> Result<f64> {
    let observable = tag.parse::<Observable>()?;
    expectation(amplitude, grid, observable)
}

/// `⟨x²⟩ − ⟨x⟩²`, both by the trapezoid rule.
pub fn variance(amplitude: &[Complex<f64>], grid: &Grid) -> Result<f64> {
    let mean = expectation(amplitude, grid, Observable::Position)?;
    Ok(expectation(amplitude, grid, Observable::PositionSquared)? - mean * mean)
}

/// Draws `count` homodyne (position) outcomes from `|ψ|²` by inverse-CDF sampling.
///
/// The density is normalized by its trapezoid integral, accumulated, and the
/// cumulative sum rescaled to end at 1. Each uniform draw `u ∈ [0, 1)` maps to the
/// first grid index whose cumulative value exceeds `u`, clamped to the grid.
///
/// # Errors
/// `DimensionMismatch` if `amplitude` and `grid` differ in length.
/// `DegenerateState` if `|ψ|²` carries no mass (or is not finite).
pub fn homodyne_sample<R: Rng + ?Sized>(
    amplitude: &[Complex<f64>],
    grid: &Grid,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    require_grid_len(amplitude, grid)?;
    let cdf = cumulative_distribution(amplitude, grid)?;
    let last = cdf.len() - 1;
    Ok((0..count)
        .map(|_| {
            let u: f64 = rng.random();
            let index = cdf.partition_point(|&c| c <= u).min(last);
            grid.point(index)
        })
        .collect())
}

fn cumulative_distribution(amplitude: &[Complex<f64>], grid: &Grid) -> Result<Vec<f64>> {
    let mut density: Vec<f64> = amplitude.iter().map(|c| c.norm_sqr()).collect();
    let mass = trapezoid(&density, grid.step());
    let total: f64 = density.iter().sum();
    if !(mass > 0.0 && mass.is_finite()) || !(total > 0.0 && total.is_finite()) {
        return Err(FaqaError::DegenerateState {
            message: format!("cannot sample from a density with mass {} over {} points", mass, density.len()),
        });
    }
    density.iter_mut().for_each(|p| *p /= mass);

    let mut running = 0.0;
    for p in density.iter_mut() {
        running += *p;
        *p = running;
    }
    let end = running;
    density.iter_mut().for_each(|c| *c /= end);
    Ok(density)
}

/// Wavenumber-space density `|F[ψ]|²·dx/dk` on `grid.conjugate()`.
///
/// The scaling makes `sum(density)·dk` equal the position-space `sum(|ψ|²)·dx`.
pub fn wavenumber_density(amplitude: &[Complex<f64>], grid: &Grid) -> Result<(Grid, Vec<f64>)> {
    require_grid_len(amplitude, grid)?;
    let k_grid = grid.conjugate()?;
    let scale = grid.step() / k_grid.step();
    let density = fourier(amplitude).iter().map(|c| c.norm_sqr() * scale).collect();
    Ok((k_grid, density))
}
