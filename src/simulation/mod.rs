// src/simulation/mod.rs

//! Runs a `faqa::circuits::Circuit` against a wave state.
//! This module contains the `Simulator` entry point and the internal `SimulationEngine`
//! that applies gates and records measurements.

mod config;
mod results;
pub(crate) mod engine;

pub use config::SimulatorConfig;
pub use results::{Diagnostic, MeasurementRecord, Representation, SimulationResult};

use crate::circuits::Circuit;
use crate::core::{Result, WaveState};
use engine::SimulationEngine;
use tracing::{debug, instrument};

/// The main simulator orchestrating the execution of circuits.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings (unseeded sampler).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` on a copy of `initial`.
    ///
    /// Operations are applied in order. Gates replace the working amplitude;
    /// measurement operations record into the result without changing it.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the input, final state, measurements and diagnostics.
    /// * `Err(FaqaError)` on an invalid config, a non-finite gate parameter, a Fourier
    ///   step applied in the wrong representation, or sampling from a zero state.
    #[instrument(level = "debug", skip_all, fields(ops = circuit.len(), points = initial.grid().len()))]
    pub fn run(&self, circuit: &Circuit, initial: &WaveState) -> Result<SimulationResult> {
        self.config.validate()?;
        let mut result = SimulationResult::new(initial.clone());
        if initial.is_degenerate() {
            tracing::warn!("running circuit on a degenerate (zero-norm) state");
            result.record_diagnostic(Diagnostic::DegenerateInput);
        }
        if circuit.is_empty() {
            return Ok(result);
        }

        let mut engine = SimulationEngine::init(initial, &self.config)?;
        for (step, op) in circuit.operations().iter().enumerate() {
            engine.apply_operation(step, op, &mut result)?;
        }

        let representation = engine.representation();
        let final_state = engine.into_state();
        debug!(norm = final_state.norm(), %representation, "circuit complete");
        result.finish(final_state, representation);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::{FaqaError, Grid};
    use crate::measurement::Observable;
    use num_complex::Complex;
    use num_traits::Zero;

    fn grid() -> Grid {
        Grid::symmetric(2048, 10.0).expect("valid grid")
    }

    #[test]
    fn empty_circuit_returns_input() -> Result<()> {
        let input = WaveState::gaussian(grid(), 0.0, 1.0, 0.0)?;
        let result = Simulator::new().run(&Circuit::new(), &input)?;
        assert_eq!(result.final_state(), &input);
        assert!(result.measurements().is_empty());
        assert_eq!(result.representation(), Representation::Position);
        Ok(())
    }

    #[test]
    fn degenerate_input_is_flagged() -> Result<()> {
        let input = WaveState::new(grid(), vec![Complex::zero(); 2048])?;
        let circuit = CircuitBuilder::new().phase(0.3).build();
        let result = Simulator::new().run(&circuit, &input)?;
        assert_eq!(result.diagnostics(), &[Diagnostic::DegenerateInput]);
        Ok(())
    }

    #[test]
    fn sampling_degenerate_state_errors() -> Result<()> {
        let input = WaveState::new(grid(), vec![Complex::zero(); 2048])?;
        let circuit = CircuitBuilder::new().homodyne(5).build();
        let err = Simulator::new().run(&circuit, &input);
        assert!(matches!(err, Err(FaqaError::DegenerateState { .. })));
        Ok(())
    }

    #[test]
    fn seeded_runs_are_reproducible() -> Result<()> {
        let input = WaveState::gaussian(grid(), -2.0, 0.6, 4.0)?;
        let circuit = CircuitBuilder::new().homodyne(200).measure(Observable::Position).build();
        let simulator = Simulator::with_config(SimulatorConfig::default().with_seed(99));
        let a = simulator.run(&circuit, &input)?;
        let b = simulator.run(&circuit, &input)?;
        assert_eq!(a.samples(), b.samples());
        assert_eq!(a.samples().len(), 200);
        assert_eq!(a.expectations(Observable::Position).len(), 1);
        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() -> Result<()> {
        let input = WaveState::gaussian(grid(), 0.0, 1.0, 0.0)?;
        let simulator = Simulator::with_config(SimulatorConfig::default().with_boundary_tolerance(f64::NAN));
        let circuit = CircuitBuilder::new().phase(0.1).build();
        assert!(matches!(simulator.run(&circuit, &input), Err(FaqaError::InvalidParameter { .. })));
        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected_for_empty_circuit() -> Result<()> {
        let input = WaveState::gaussian(grid(), 0.0, 1.0, 0.0)?;
        let simulator = Simulator::with_config(SimulatorConfig::default().with_norm_tolerance(f64::NAN));
        assert!(matches!(simulator.run(&Circuit::new(), &input), Err(FaqaError::InvalidParameter { .. })));
        Ok(())
    }
}
