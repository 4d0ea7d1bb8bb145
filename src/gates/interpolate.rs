// src/gates/interpolate.rs

//! Piecewise-linear resampling on a uniform grid.

use crate::core::Grid;
use num_complex::Complex;
use num_traits::Zero;

/// Linear interpolation of `values` (sampled on `grid`) at `query`.
///
/// Queries outside `[grid.start(), grid.end()]`, or non-finite queries, return
/// zero. Real and imaginary parts are interpolated independently, which for
/// linear interpolation is the same as interpolating the complex value.
pub(crate) fn linear_zero_fill(values: &[Complex<f64>], grid: &Grid, query: f64) -> Complex<f64> {
    let n = values.len().min(grid.len());
    if n == 0 || !query.is_finite() || !grid.contains(query) {
        return Complex::zero();
    }
    if n == 1 {
        return values[0];
    }
    let t = (query - grid.start()) / grid.step();
    // `contains` bounds t to [0, n-1]; clamp so the right endpoint uses the last segment.
    let lower = (t.floor() as usize).min(n - 2);
    let frac = (t - lower as f64).clamp(0.0, 1.0);
    values[lower] * (1.0 - frac) + values[lower + 1] * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn ramp() -> (Grid, Vec<Complex<f64>>) {
        let grid = Grid::new(0.0, 1.0, 4).expect("valid grid");
        let values = (0..4).map(|i| Complex::new(i as f64, -2.0 * i as f64)).collect();
        (grid, values)
    }

    #[test]
    fn interpolates_between_samples() {
        let (grid, values) = ramp();
        let mid = linear_zero_fill(&values, &grid, 1.25);
        assert!((mid.re - 1.25).abs() < TOL);
        assert!((mid.im + 2.5).abs() < TOL);
    }

    #[test]
    fn endpoints_are_exact() {
        let (grid, values) = ramp();
        assert_eq!(linear_zero_fill(&values, &grid, 0.0), values[0]);
        assert!((linear_zero_fill(&values, &grid, 3.0) - values[3]).norm() < TOL);
    }

    #[test]
    fn outside_range_is_zero() {
        let (grid, values) = ramp();
        assert!(linear_zero_fill(&values, &grid, -0.001).is_zero());
        assert!(linear_zero_fill(&values, &grid, 3.001).is_zero());
        assert!(linear_zero_fill(&values, &grid, f64::NAN).is_zero());
        assert!(linear_zero_fill(&values, &grid, f64::INFINITY).is_zero());
    }
}
