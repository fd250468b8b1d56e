// src/gates/subcircuit.rs

use crate::circuits::{Circuit, Register};
use crate::core::{CircuitError, Result};
use crate::validation::check_qubit_index;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::Gate;

/// Embeds a whole circuit as a single gate acting on chosen parent qubits.
///
/// The sub-circuit is shared: several parents (or several gates of one
/// parent) may hold the same `Rc<Circuit>`. Applying the gate never touches
/// the sub-circuit's own register; the program runs on a scratch register
/// seeded from the mapped parent qubits.
#[derive(Clone)]
pub struct CircuitGate {
    circuit: Rc<Circuit>,
    /// `qubit_indices[i]` is the parent qubit feeding sub-circuit qubit `i`.
    /// `None` until a mapping has been set.
    qubit_indices: Option<Vec<usize>>,
    name: String,
}

impl CircuitGate {
    /// Wraps a shared circuit. The gate has no qubit mapping yet.
    pub fn new(circuit: Rc<Circuit>) -> Self {
        Self {
            circuit,
            qubit_indices: None,
            name: "U".to_string(),
        }
    }

    /// Sets the label used when drawing and displaying the gate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Builder-style [`Self::set_qubit_indices`].
    pub fn with_qubit_indices(mut self, indices: Vec<usize>) -> Result<Self> {
        self.set_qubit_indices(indices)?;
        Ok(self)
    }

    /// Maps parent qubits onto the sub-circuit's qubits, in order.
    ///
    /// # Errors
    /// * `InvalidQubitIndicesCount` if `indices.len()` differs from the
    ///   sub-circuit's qubit count.
    /// * `DuplicateQubitIndex` if a parent qubit appears twice.
    ///
    /// On error the previous mapping is kept.
    pub fn set_qubit_indices(&mut self, indices: Vec<usize>) -> Result<()> {
        let expected = self.circuit.qubit_count();
        if indices.len() != expected {
            return Err(CircuitError::InvalidQubitIndicesCount {
                expected,
                actual: indices.len(),
            });
        }
        let mut seen = HashSet::with_capacity(indices.len());
        for index in &indices {
            if !seen.insert(*index) {
                return Err(CircuitError::DuplicateQubitIndex { index: *index });
            }
        }
        self.qubit_indices = Some(indices);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn circuit(&self) -> &Rc<Circuit> {
        &self.circuit
    }

    /// The parent qubits this gate acts on; empty while uninitialized.
    pub fn qubit_indices(&self) -> &[usize] {
        self.qubit_indices.as_deref().unwrap_or(&[])
    }

    pub fn is_initialized(&self) -> bool {
        self.qubit_indices.is_some()
    }

    /// Shorthand for `Gate::from(self).make_controlled(control, is_classical)`.
    pub fn make_controlled(self, control: usize, is_classical: bool) -> Gate {
        Gate::from(self).make_controlled(control, is_classical)
    }

    fn mapping(&self, qubit_count: usize) -> Result<&[usize]> {
        self.qubit_indices
            .as_deref()
            .ok_or(CircuitError::UninitializedCircuitGate {
                required: self.circuit.qubit_count(),
                available: qubit_count,
            })
    }

    pub(crate) fn verify(&self, qubit_count: usize, _bit_count: usize) -> Result<()> {
        for index in self.mapping(qubit_count)? {
            check_qubit_index(*index, qubit_count)?;
        }
        Ok(())
    }

    /// Copies the mapped parent qubits in, runs the sub-circuit's program
    /// once, and copies the resulting states back out.
    pub(crate) fn apply(&self, register: &mut Register) -> Result<()> {
        let mapping = self.mapping(register.qubit_count())?;
        let mut scratch = self.circuit.fresh_register();

        for (inner, &outer) in mapping.iter().enumerate() {
            scratch.qubit_mut(inner)?.copy_state_from(register.qubit(outer)?)?;
        }

        self.circuit.execute(&mut scratch)?;

        for (inner, &outer) in mapping.iter().enumerate() {
            register.qubit_mut(outer)?.copy_state_from(scratch.qubit(inner)?)?;
        }
        Ok(())
    }
}

impl PartialEq for CircuitGate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.circuit, &other.circuit)
            && self.qubit_indices == other.qubit_indices
            && self.name == other.name
    }
}

impl fmt::Debug for CircuitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircuitGate")
            .field("name", &self.name)
            .field("qubit_indices", &self.qubit_indices)
            .field("gates", &self.circuit.len())
            .finish()
    }
}

impl fmt::Display for CircuitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, index) in self.qubit_indices().iter().enumerate() {
            write!(f, "{}q{}", if i > 0 { ", " } else { "" }, index)?;
        }
        write!(f, ")")
    }
}
