// src/simulation/results.rs
use crate::core::WaveState;
use crate::measurement::Observable;
use std::fmt;

/// Which axis the amplitude is currently sampled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Position grid `x`.
    Position,
    /// Conjugate wavenumber grid `k` (after `Fourier`).
    Wavenumber,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Position => write!(f, "x"),
            Representation::Wavenumber => write!(f, "k"),
        }
    }
}

/// An approximation artifact observed while running a circuit.
///
/// None of these abort the run; they make the silent fidelity losses of the
/// gates visible to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The input state had zero mass and was never normalized.
    DegenerateInput,
    /// A displacement carried probability across the grid edge.
    BoundaryWrap {
        /// Index of the operation in the circuit.
        step: usize,
        /// Fraction of `sum(|ψ|²)` that wrapped.
        wrapped_fraction: f64,
    },
    /// A squeeze changed the discrete norm.
    NormDrift {
        /// Index of the operation in the circuit.
        step: usize,
        /// Norm before the squeeze.
        before: f64,
        /// Norm after the squeeze.
        after: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DegenerateInput => write!(f, "input state is degenerate (zero norm)"),
            Diagnostic::BoundaryWrap { step, wrapped_fraction } => {
                write!(f, "step {}: displacement wrapped {:.3e} of the probability", step, wrapped_fraction)
            }
            Diagnostic::NormDrift { step, before, after } => {
                write!(f, "step {}: squeeze moved norm {:.6} -> {:.6}", step, before, after)
            }
        }
    }
}

/// A value recorded by a measurement operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementRecord {
    /// Result of `Operation::Expectation`.
    Expectation {
        /// Index of the operation in the circuit.
        step: usize,
        /// Axis the expectation was taken over.
        representation: Representation,
        observable: Observable,
        value: f64,
    },
    /// Result of `Operation::Homodyne`.
    Samples {
        /// Index of the operation in the circuit.
        step: usize,
        /// Axis the samples are coordinates on.
        representation: Representation,
        values: Vec<f64>,
    },
}

/// Holds the results of a circuit simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    initial_state: WaveState,
    final_state: WaveState,
    representation: Representation,
    measurements: Vec<MeasurementRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl SimulationResult {
    /// Result of a run that applied nothing. (Internal visibility)
    pub(crate) fn new(initial_state: WaveState) -> Self {
        Self {
            final_state: initial_state.clone(),
            initial_state,
            representation: Representation::Position,
            measurements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn record_measurement(&mut self, record: MeasurementRecord) {
        self.measurements.push(record);
    }

    pub(crate) fn record_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(&mut self, final_state: WaveState, representation: Representation) {
        self.final_state = final_state;
        self.representation = representation;
    }

    /// The untouched input state.
    pub fn initial_state(&self) -> &WaveState {
        &self.initial_state
    }

    /// The state after the last operation.
    pub fn final_state(&self) -> &WaveState {
        &self.final_state
    }

    /// Axis the final state is sampled on.
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Riemann-sum `⟨x⟩` of the input state.
    pub fn initial_mean(&self) -> f64 {
        self.initial_state.expectation_position()
    }

    pub fn measurements(&self) -> &[MeasurementRecord] {
        &self.measurements
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Values of all recorded expectations of `observable`, in circuit order.
    pub fn expectations(&self, observable: Observable) -> Vec<f64> {
        self.measurements
            .iter()
            .filter_map(|record| match record {
                MeasurementRecord::Expectation { observable: o, value, .. } if *o == observable => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Every homodyne sample recorded, concatenated in circuit order.
    pub fn samples(&self) -> Vec<f64> {
        self.measurements
            .iter()
            .filter_map(|record| match record {
                MeasurementRecord::Samples { values, .. } => Some(values.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Input:  {}", self.initial_state)?;
        writeln!(f, "  Output: {} ({}-space)", self.final_state, self.representation)?;
        writeln!(f, "  <x>_in = {:.6}", self.initial_mean())?;
        if self.measurements.is_empty() {
            writeln!(f, "  No measurements recorded.")?;
        }
        for record in &self.measurements {
            match record {
                MeasurementRecord::Expectation { step, representation, observable, value } => {
                    writeln!(f, "    [{}] <{}> ({}-space) = {:.6}", step, observable, representation, value)?
                }
                MeasurementRecord::Samples { step, representation, values } => {
                    writeln!(f, "    [{}] {} homodyne samples ({}-space)", step, values.len(), representation)?
                }
            }
        }
        for diagnostic in &self.diagnostics {
            writeln!(f, "  warning: {}", diagnostic)?;
        }
        Ok(())
    }
}
