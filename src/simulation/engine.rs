// src/simulation/engine.rs
use crate::core::{FaqaError, Grid, Result, WaveState};
use crate::gates;
use crate::measurement;
use crate::operations::Operation;
use crate::simulation::SimulationResult;
use crate::simulation::config::SimulatorConfig;
use crate::simulation::results::{Diagnostic, MeasurementRecord, Representation};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

/// Evolves one wave state through a sequence of operations.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// The state being evolved. Its grid is the position grid or its conjugate,
    /// depending on `representation`.
    state: WaveState,
    /// Position grid the run started on; restored by `InverseFourier`.
    position_grid: Grid,
    representation: Representation,
    rng: StdRng,
    norm_tolerance: f64,
    boundary_tolerance: f64,
}

impl SimulationEngine {
    /// Takes a deep copy of `initial` so the caller's state is never touched.
    pub(crate) fn init(initial: &WaveState, config: &SimulatorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            state: initial.clone(),
            position_grid: *initial.grid(),
            representation: Representation::Position,
            rng,
            norm_tolerance: config.norm_tolerance,
            boundary_tolerance: config.boundary_tolerance,
        })
    }

    pub(crate) fn representation(&self) -> Representation {
        self.representation
    }

    pub(crate) fn into_state(self) -> WaveState {
        self.state
    }

    /// Applies operation number `step`, recording measurements and diagnostics into `result`.
    pub(crate) fn apply_operation(&mut self, step: usize, op: &Operation, result: &mut SimulationResult) -> Result<()> {
        if let Some(bad) = op.parameters().into_iter().find(|p| !p.is_finite()) {
            return Err(FaqaError::InvalidParameter {
                message: format!("operation {} at step {} has non-finite parameter {}", op, step, bad),
            });
        }
        debug!(step, op = %op, representation = %self.representation, "applying operation");

        match op {
            Operation::Squeeze { s } => {
                let before = self.state.norm();
                let out = gates::squeezing(self.state.amplitude(), self.state.grid(), *s);
                self.state.set_amplitude(out)?;
                let after = self.state.norm();
                if (after - before).abs() > self.norm_tolerance {
                    self.diagnose(result, Diagnostic::NormDrift { step, before, after });
                }
            }
            Operation::CubicPhase { gamma } => {
                let out = gates::cubic_phase(self.state.amplitude(), self.state.grid(), *gamma);
                self.state.set_amplitude(out)?;
            }
            Operation::Displace { a } => {
                let wrapped_fraction =
                    gates::displacement_wrapped_fraction(self.state.amplitude(), self.state.grid(), *a);
                let out = gates::displacement(self.state.amplitude(), self.state.grid(), *a);
                self.state.set_amplitude(out)?;
                if wrapped_fraction > self.boundary_tolerance {
                    self.diagnose(result, Diagnostic::BoundaryWrap { step, wrapped_fraction });
                }
            }
            Operation::PhaseShift { phi } => {
                let out = gates::phase(self.state.amplitude(), *phi);
                self.state.set_amplitude(out)?;
            }
            Operation::Fourier => {
                self.require(Representation::Position, op)?;
                let k_grid = self.position_grid.conjugate()?;
                // The FFT keeps sum(|ψ|²); rescale so sum(|ψ|²)·dk matches sum(|ψ|²)·dx.
                let scale = (self.position_grid.step() / k_grid.step()).sqrt();
                let out = gates::fourier(self.state.amplitude()).into_iter().map(|c| c * scale).collect();
                self.state.rebase(k_grid, out)?;
                self.representation = Representation::Wavenumber;
            }
            Operation::InverseFourier => {
                self.require(Representation::Wavenumber, op)?;
                let scale = (self.state.dx() / self.position_grid.step()).sqrt();
                let out = gates::inverse_fourier(self.state.amplitude()).into_iter().map(|c| c * scale).collect();
                self.state.rebase(self.position_grid, out)?;
                self.representation = Representation::Position;
            }
            Operation::Expectation { observable } => {
                let value = measurement::expectation(self.state.amplitude(), self.state.grid(), *observable)?;
                debug!(step, observable = %observable, value, "recorded expectation");
                result.record_measurement(MeasurementRecord::Expectation {
                    step,
                    representation: self.representation,
                    observable: *observable,
                    value,
                });
            }
            Operation::Homodyne { samples } => {
                let values =
                    measurement::homodyne_sample(self.state.amplitude(), self.state.grid(), *samples, &mut self.rng)?;
                debug!(step, count = values.len(), "recorded homodyne samples");
                result.record_measurement(MeasurementRecord::Samples {
                    step,
                    representation: self.representation,
                    values,
                });
            }
        }
        Ok(())
    }

    fn require(&self, expected: Representation, op: &Operation) -> Result<()> {
        if self.representation == expected {
            Ok(())
        } else {
            Err(FaqaError::InvalidOperation {
                message: format!("{} requires {}-space amplitude, state is in {}-space", op, expected, self.representation),
            })
        }
    }

    fn diagnose(&self, result: &mut SimulationResult, diagnostic: Diagnostic) {
        warn!(%diagnostic, "approximation artifact");
        result.record_diagnostic(diagnostic);
    }
}
