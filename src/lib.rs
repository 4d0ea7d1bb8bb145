// src/lib.rs

//! `faqa` - Function-axis quantum amplitudes
//!
//! A one-dimensional wavefunction sampled on a uniform grid, a set of gate
//! operators (squeezing, cubic phase, displacement, centred Fourier transform,
//! phase, two-mode mixing) and a measurement layer (trapezoid expectation values,
//! inverse-CDF homodyne sampling).
//!
//! The gate and measurement functions are pure and can be called directly on
//! amplitude slices. `Circuit` + `Simulator` wrap them into a recorded pipeline.
//! Plotting and file output are left to the caller.

pub mod core;
pub mod gates;
pub mod measurement;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{FaqaError, Grid, Normalization, Result, WaveState};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use measurement::Observable;
pub use simulation::{Diagnostic, MeasurementRecord, Representation, SimulationResult, Simulator, SimulatorConfig};
pub use validation::{check_normalization, check_same_grid, validate_state};

// Example: the squeeze -> cubic phase -> displace -> Fourier pipeline.
/// ```
/// use faqa::{CircuitBuilder, Grid, Observable, Representation, Simulator, SimulatorConfig, WaveState};
///
/// let grid = Grid::symmetric(2048, 10.0)?;
/// let psi0 = WaveState::gaussian(grid, -2.0, 0.6, 4.0)?;
///
/// let circuit = CircuitBuilder::new()
///     .squeeze(0.8)
///     .cubic_phase(0.01)
///     .displace(1.2)
///     .measure(Observable::Position)
///     .homodyne(1000)
///     .fourier()
///     .build();
/// println!("{}", circuit);
///
/// let simulator = Simulator::with_config(SimulatorConfig::default().with_seed(7));
/// let result = simulator.run(&circuit, &psi0)?;
/// println!("{}", result);
///
/// // Squeezing by 0.8 pulls the mean towards the origin before the shift and
/// // scales the norm to 0.64; the Fourier step keeps that norm.
/// let norm = result.final_state().norm();
/// assert!((norm - 0.64).abs() < 1e-3);
/// let x_out = result.expectations(Observable::Position)[0];
/// assert!((x_out / norm - (-2.0 * 0.8 + 1.2)).abs() < 0.05);
/// assert_eq!(result.samples().len(), 1000);
/// assert_eq!(result.representation(), Representation::Wavenumber);
/// # Ok::<(), faqa::FaqaError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
