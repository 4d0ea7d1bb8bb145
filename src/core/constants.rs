//! Numeric constants shared by the engine and validation.

/// Constants and default tolerances
pub mod faqa_constants {
    /// Used for Gaussian prefactors and wavenumber spacing
    pub const PI: f64 = std::f64::consts::PI;
    /// 2π
    pub const TAU: f64 = std::f64::consts::TAU;
    /// Default allowed deviation of `sum(|ψ|²)·dx` from 1.0.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Default fraction of probability allowed to wrap across the grid edge
    /// on displacement before a diagnostic is recorded.
    pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 1e-6;
    /// Relative tolerance when comparing two grids' start and step.
    pub const GRID_TOLERANCE: f64 = 1e-12;
}
