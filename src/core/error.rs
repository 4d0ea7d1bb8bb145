//! Error handling logic

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FaqaError>;

/// Failures raised by state construction, gates, measurement and simulation.
///
/// Approximation artifacts (circular wrap on displacement, zero-fill on squeezing,
/// skipped normalization of an all-zero state) are *not* errors; they are reported
/// through `Normalization` and simulation diagnostics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FaqaError {
    /// An observable tag outside the recognised set was requested.
    #[error("Unsupported Operator: '{tag}' (expected one of: x, position, x2, position_squared)")]
    UnsupportedOperator {
        /// The rejected tag
        tag: String,
    },

    /// Two arrays or grids that must line up point-for-point do not.
    #[error("Dimension Mismatch: expected {expected} samples, found {found}")]
    DimensionMismatch {
        /// Length (or grid size) required by the receiving side
        expected: usize,
        /// Length actually supplied
        found: usize,
    },

    /// A scalar parameter is outside its domain (non-finite, non-positive width, ...).
    #[error("Invalid Parameter: {message}")]
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// An operation is inconsistent with the current representation of the state.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The state carries no probability mass, so a density cannot be formed.
    #[error("Degenerate State: {message}")]
    DegenerateState {
        /// DegenerateState failure message
        message: String,
    },

    /// Normalization or finiteness validation failed.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}
