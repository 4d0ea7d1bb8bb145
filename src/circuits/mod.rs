// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`faqa::operations::Operation`).
//!
//! A `Circuit` is a single-mode pipeline: every operation acts on the one state
//! the `Simulator` is run against, in order.

use crate::measurement::Observable;
use crate::operations::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an ordered sequence of Operations applied to one wave state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// The ordered sequence of operations; order is significant.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { operations: Vec::new() }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the circuit's sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations that modify the amplitude.
    pub fn gate_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_gate()).count()
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    pub fn squeeze(self, s: f64) -> Self {
        self.add_op(Operation::Squeeze { s })
    }

    pub fn cubic_phase(self, gamma: f64) -> Self {
        self.add_op(Operation::CubicPhase { gamma })
    }

    pub fn displace(self, a: f64) -> Self {
        self.add_op(Operation::Displace { a })
    }

    pub fn phase(self, phi: f64) -> Self {
        self.add_op(Operation::PhaseShift { phi })
    }

    pub fn fourier(self) -> Self {
        self.add_op(Operation::Fourier)
    }

    pub fn inverse_fourier(self) -> Self {
        self.add_op(Operation::InverseFourier)
    }

    /// Records an expectation value at this point in the sequence.
    pub fn measure(self, observable: Observable) -> Self {
        self.add_op(Operation::Expectation { observable })
    }

    /// Records `samples` homodyne draws at this point in the sequence.
    pub fn homodyne(self, samples: usize) -> Self {
        self.add_op(Operation::Homodyne { samples })
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return write!(f, "faqa::Circuit[0 operations]");
        }
        const WIRE: &str = "──";
        write!(f, "ψ: {}", WIRE)?;
        for op in &self.operations {
            write!(f, "[{}]{}", op.label(), WIRE)?;
        }
        Ok(())
    }
}
