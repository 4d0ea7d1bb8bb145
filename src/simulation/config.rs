// src/simulation/config.rs

//! Simulator settings.

use crate::core::constants::faqa_constants::{DEFAULT_BOUNDARY_TOLERANCE, DEFAULT_NORM_TOLERANCE};
use crate::core::{FaqaError, Result};
use serde::{Deserialize, Serialize};

/// Settings for a `Simulator`.
///
/// All fields have defaults, so a partial serialized config is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Seed for the homodyne sampler. `None` draws from OS entropy on every run.
    pub seed: Option<u64>,

    /// Norm drift (`|Δ sum(|ψ|²)·dx|`) a squeeze may cause before a diagnostic is recorded.
    ///
    /// Squeezing by `s` multiplies the norm by `s²` even with no mass lost at the
    /// edges, so any `s` other than `±1` records `NormDrift` at the default
    /// tolerance. Raise this only to silence boundary loss on top of that factor
    /// when the factor itself is expected.
    pub norm_tolerance: f64,

    /// Probability fraction a displacement may wrap across the grid edge before a
    /// diagnostic is recorded.
    pub boundary_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Fixes the sampler seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_boundary_tolerance(mut self, tolerance: f64) -> Self {
        self.boundary_tolerance = tolerance;
        self
    }

    /// Tolerances must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("norm_tolerance", self.norm_tolerance), ("boundary_tolerance", self.boundary_tolerance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FaqaError::InvalidParameter {
                    message: format!("{} must be finite and non-negative, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}
