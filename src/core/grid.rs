// src/core/grid.rs

use super::constants::faqa_constants::{GRID_TOLERANCE, TAU};
use super::error::{FaqaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A uniform, ascending 1D sample axis.
///
/// The grid is stored as `(start, step, count)` rather than as a list of
/// coordinates, so every grid is uniform by construction. Sample `i` sits at
/// `start + i * step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    start: f64,
    step: f64,
    count: usize,
}

impl Grid {
    /// Creates a grid of `count` points starting at `start` spaced by `step`.
    ///
    /// # Errors
    /// `InvalidParameter` if `start` is not finite or `step` is not finite and positive.
    pub fn new(start: f64, step: f64, count: usize) -> Result<Self> {
        if !start.is_finite() {
            return Err(FaqaError::InvalidParameter {
                message: format!("grid start must be finite, got {}", start),
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FaqaError::InvalidParameter {
                message: format!("grid step must be finite and positive, got {}", step),
            });
        }
        Ok(Self { start, step, count })
    }

    /// `count` points covering `[-x_max, x_max)`, endpoint excluded.
    pub fn symmetric(count: usize, x_max: f64) -> Result<Self> {
        if count == 0 {
            return Err(FaqaError::InvalidParameter {
                message: "symmetric grid needs at least one point".to_string(),
            });
        }
        if !x_max.is_finite() || x_max <= 0.0 {
            return Err(FaqaError::InvalidParameter {
                message: format!("x_max must be finite and positive, got {}", x_max),
            });
        }
        Self::new(-x_max, 2.0 * x_max / count as f64, count)
    }

    /// Derives a grid from explicit coordinates using only the first two samples.
    /// Uniformity of the remaining samples is assumed, not checked.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        match samples {
            [first, second, ..] => Self::new(*first, second - first, samples.len()),
            _ => Err(FaqaError::InvalidParameter {
                message: format!("need at least two samples to derive a grid, got {}", samples.len()),
            }),
        }
    }

    /// First coordinate.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Spacing between neighbouring samples (`dx`).
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Coordinate of sample `i`. Not bounds-checked; `i >= len()` extrapolates.
    pub fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Last coordinate (equal to `start` for an empty grid).
    pub fn end(&self) -> f64 {
        self.point(self.count.saturating_sub(1))
    }

    /// Whether `x` lies inside `[start, end]`.
    pub fn contains(&self, x: f64) -> bool {
        !self.is_empty() && x >= self.start && x <= self.end()
    }

    /// Materialised coordinates.
    pub fn points(&self) -> Vec<f64> {
        (0..self.count).map(|i| self.point(i)).collect()
    }

    /// Iterator over coordinates.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.point(i))
    }

    /// Wavenumber axis conjugate to this grid under the centred Fourier convention.
    ///
    /// `dk = 2π / (N·dx)` and `k_i = (i - ⌊N/2⌋)·dk`, so the zero wavenumber lands
    /// on index `N/2`, matching the output order of `gates::fourier`.
    pub fn conjugate(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(FaqaError::InvalidParameter {
                message: "an empty grid has no conjugate axis".to_string(),
            });
        }
        let dk = TAU / (self.count as f64 * self.step);
        let half = (self.count / 2) as f64;
        Self::new(-half * dk, dk, self.count)
    }

    /// Same size and (within relative tolerance) same start and spacing.
    pub fn is_compatible(&self, other: &Grid) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= GRID_TOLERANCE * a.abs().max(b.abs()).max(1.0);
        self.count == other.count && close(self.step, other.step) && close(self.start, other.start)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid[{} pts, {:.4} .. {:.4}, dx={:.3e}]", self.count, self.start, self.end(), self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn symmetric_grid_excludes_endpoint() -> Result<()> {
        let grid = Grid::symmetric(4, 1.0)?;
        assert_eq!(grid.points(), vec![-1.0, -0.5, 0.0, 0.5]);
        assert!((grid.step() - 0.5).abs() < TOL);
        assert!(grid.contains(0.5));
        assert!(!grid.contains(1.0));
        Ok(())
    }

    #[test]
    fn from_samples_uses_first_two_points() -> Result<()> {
        let grid = Grid::from_samples(&[2.0, 2.25, 2.5, 2.75])?;
        assert_eq!(grid.len(), 4);
        assert!((grid.step() - 0.25).abs() < TOL);
        assert!((grid.end() - 2.75).abs() < TOL);
        assert!(Grid::from_samples(&[1.0]).is_err());
        Ok(())
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(matches!(Grid::new(0.0, 0.0, 8), Err(FaqaError::InvalidParameter { .. })));
        assert!(matches!(Grid::new(0.0, -1.0, 8), Err(FaqaError::InvalidParameter { .. })));
        assert!(matches!(Grid::new(f64::NAN, 1.0, 8), Err(FaqaError::InvalidParameter { .. })));
    }

    #[test]
    fn conjugate_axis_is_centred() -> Result<()> {
        // Even length: zero at index N/2, ascending.
        let grid = Grid::new(0.0, 0.5, 4)?;
        let k = grid.conjugate()?;
        let dk = TAU / (4.0 * 0.5);
        assert!((k.step() - dk).abs() < TOL);
        assert!((k.point(0) + 2.0 * dk).abs() < TOL);
        assert!(k.point(2).abs() < TOL);

        // Odd length: symmetric around the centre sample.
        let k = Grid::new(0.0, 1.0, 5)?.conjugate()?;
        assert!(k.point(2).abs() < TOL);
        assert!((k.point(0) + k.point(4)).abs() < TOL);
        Ok(())
    }

    #[test]
    fn compatibility_tolerates_rounding_only() -> Result<()> {
        let a = Grid::symmetric(2048, 10.0)?;
        let b = Grid::from_samples(&a.points())?;
        assert!(a.is_compatible(&b));
        assert!(!a.is_compatible(&Grid::symmetric(1024, 10.0)?));
        assert!(!a.is_compatible(&Grid::symmetric(2048, 11.0)?));
        Ok(())
    }
}
