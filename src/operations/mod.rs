// src/operations/mod.rs

//! Defines the steps a gate pipeline can be built from.
//!
//! An `Operation` is the data form of one call into `gates` or `measurement`.
//! Sequencing them in a `Circuit` lets an orchestrator describe
//! "squeeze, then cubic phase, then displace, then transform" without holding
//! intermediate arrays itself.

use crate::measurement::Observable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a single-mode gate pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // f64 fields, so no Eq
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Coordinate rescaling `x → s·x` (see `gates::squeezing`).
    Squeeze {
        /// Squeeze factor; `|s| > 1` widens, `|s| < 1` narrows.
        s: f64,
    },

    /// Non-Gaussian phase `exp(i·γ·x³)`.
    CubicPhase {
        /// Cubic coefficient γ.
        gamma: f64,
    },

    /// Translation by `a`, rounded to whole grid samples, with circular wrap.
    Displace {
        /// Displacement distance in grid units of length.
        a: f64,
    },

    /// Global phase `exp(i·φ)`.
    PhaseShift {
        /// Phase angle in radians.
        phi: f64,
    },

    /// Centred unitary Fourier transform into wavenumber space.
    Fourier,

    /// Inverse of `Fourier`, back to position space.
    InverseFourier,

    /// Records `⟨O⟩` of the current state without modifying it.
    Expectation {
        /// Observable to evaluate.
        observable: Observable,
    },

    /// Records homodyne samples drawn from the current density.
    Homodyne {
        /// Number of samples to draw.
        samples: usize,
    },
}

impl Operation {
    /// Whether the operation changes the amplitude (as opposed to only reading it).
    pub fn is_gate(&self) -> bool {
        !matches!(self, Operation::Expectation { .. } | Operation::Homodyne { .. })
    }

    /// Scalar parameters carried by the operation, for finiteness checks.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            Operation::Squeeze { s } => vec![*s],
            Operation::CubicPhase { gamma } => vec![*gamma],
            Operation::Displace { a } => vec![*a],
            Operation::PhaseShift { phi } => vec![*phi],
            Operation::Fourier
            | Operation::InverseFourier
            | Operation::Expectation { .. }
            | Operation::Homodyne { .. } => Vec::new(),
        }
    }

    /// Short label used when printing circuits.
    pub fn label(&self) -> String {
        match self {
            Operation::Squeeze { s } => format!("S({})", s),
            Operation::CubicPhase { gamma } => format!("V({})", gamma),
            Operation::Displace { a } => format!("D({})", a),
            Operation::PhaseShift { phi } => format!("R({})", phi),
            Operation::Fourier => "F".to_string(),
            Operation::InverseFourier => "F†".to_string(),
            Operation::Expectation { observable } => format!("<{}>", observable),
            Operation::Homodyne { samples } => format!("M[{}]", samples),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
