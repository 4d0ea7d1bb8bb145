// src/validation/mod.rs

//! Provides functions to validate `WaveState`s and grid compatibility.

use crate::core::constants::faqa_constants::DEFAULT_NORM_TOLERANCE;
use crate::core::{FaqaError, Grid, WaveState};

/// Checks that the discrete norm `sum(|ψ|²)·dx` is 1 within tolerance.
///
/// # Arguments
/// * `state` - The `WaveState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (default `1e-9`).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(FaqaError::Incoherence)` otherwise.
pub fn check_normalization(state: &WaveState, tolerance: Option<f64>) -> Result<(), FaqaError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm = state.norm();
    if (norm - 1.0).abs() > effective_tolerance {
        Err(FaqaError::Incoherence {
            message: format!("State normalization failed. Sum(|psi|^2)*dx = {} (Deviation > {})", norm, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that two grids describe the same sample points.
pub fn check_same_grid(a: &Grid, b: &Grid) -> Result<(), FaqaError> {
    if a.is_compatible(b) {
        Ok(())
    } else {
        Err(FaqaError::DimensionMismatch { expected: a.len(), found: b.len() })
    }
}

/// Full check: every amplitude finite, then normalization.
pub fn validate_state(state: &WaveState, norm_tolerance: Option<f64>) -> Result<(), FaqaError> {
    if let Some(index) = state.amplitude().iter().position(|c| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(FaqaError::Incoherence {
            message: format!("Non-finite amplitude at index {} ({})", index, state.amplitude()[index]),
        });
    }
    check_normalization(state, norm_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn grid() -> Grid {
        Grid::symmetric(256, 5.0).expect("valid grid")
    }

    #[test]
    fn fresh_state_validates() -> Result<(), FaqaError> {
        let state = WaveState::gaussian(grid(), 0.5, 0.7, 1.0)?;
        validate_state(&state, None)
    }

    #[test]
    fn drifted_state_fails_normalization() -> Result<(), FaqaError> {
        let mut state = WaveState::gaussian(grid(), 0.5, 0.7, 1.0)?;
        state.amplitude_mut()[128] += Complex::new(3.0, 0.0);
        assert!(matches!(check_normalization(&state, None), Err(FaqaError::Incoherence { .. })));
        assert!(check_normalization(&state, Some(1e3)).is_ok());
        Ok(())
    }

    #[test]
    fn nan_amplitude_is_reported() -> Result<(), FaqaError> {
        let mut state = WaveState::gaussian(grid(), 0.0, 1.0, 0.0)?;
        state.amplitude_mut()[3] = Complex::new(f64::NAN, 0.0);
        let err = validate_state(&state, None).expect_err("NaN must fail");
        assert!(err.to_string().contains("index 3"));
        Ok(())
    }

    #[test]
    fn grid_mismatch() -> Result<(), FaqaError> {
        check_same_grid(&grid(), &grid())?;
        assert!(check_same_grid(&grid(), &Grid::symmetric(128, 5.0)?).is_err());
        Ok(())
    }
}
