// src/circuits/mod.rs

//! Defines the [`Circuit`]: a register of qubits and classical bits plus the
//! ordered gate program that acts on it.
//!
//! Gates are appended only through validated `add` operations. A rejected
//! gate leaves the program unchanged. Execution lives in
//! [`crate::simulation`].

pub mod drawing;
mod register;

pub use register::Register;

use crate::core::{CircuitError, ClassicBit, ProbabilityEngine, Qubit, QubitState, Result};
use crate::gates::{CircuitGate, Gate};
use std::rc::Rc;

/// A quantum circuit.
///
/// The circuit owns its register and its gates. The probability engine is
/// shared with every qubit of the register.
///
/// Analogy: similar to `qiskit.QuantumCircuit`, with the simplification that
/// each qubit carries its own two-amplitude state.
#[derive(Clone)]
pub struct Circuit {
    engine: Rc<ProbabilityEngine>,
    pub(crate) register: Register,
    /// The ordered program; order is execution order.
    pub(crate) gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a circuit with `qubit_count` qubits in `|0⟩` and
    /// `classic_bit_count` bits at `0`, and no gates.
    pub fn new(
        engine: Rc<ProbabilityEngine>,
        qubit_count: usize,
        classic_bit_count: usize,
    ) -> Self {
        let register = Register::new(&engine, qubit_count, classic_bit_count);
        Self {
            engine,
            register,
            gates: Vec::new(),
        }
    }

    /// Creates a circuit without classical bits, typically used as a
    /// sub-circuit.
    pub fn with_qubits(engine: Rc<ProbabilityEngine>, qubit_count: usize) -> Self {
        Self::new(engine, qubit_count, 0)
    }

    pub fn engine(&self) -> &Rc<ProbabilityEngine> {
        &self.engine
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    pub fn qubit_count(&self) -> usize {
        self.register.qubit_count()
    }

    pub fn classic_bit_count(&self) -> usize {
        self.register.classic_bit_count()
    }

    pub fn qubit(&self, index: usize) -> Result<&Qubit> {
        self.register.qubit(index)
    }

    pub fn classic_bit(&self, index: usize) -> Result<ClassicBit> {
        self.register.classic_bit(index)
    }

    /// Returns a slice containing the ordered gate program.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the number of gates in the program.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the program contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Verifies `gate` against the current register sizes and appends it.
    ///
    /// A sub-circuit gate without a qubit mapping is mapped onto the first
    /// qubits, with a warning, when the register is large enough.
    ///
    /// # Errors
    /// Any verification error of [`Gate::verify`]; the program is unchanged.
    pub fn add_gate(&mut self, gate: impl Into<Gate>) -> Result<()> {
        let mut gate = gate.into();
        gate.assign_default_mappings(self.qubit_count())?;
        if let Err(err) = gate.verify(self.qubit_count(), self.classic_bit_count()) {
            log::debug!("rejected gate {}: {}", gate, err);
            return Err(err);
        }
        self.gates.push(gate);
        Ok(())
    }

    pub fn add_hadamard_gate(&mut self, target: usize) -> Result<()> {
        self.add_gate(Gate::hadamard(target))
    }

    pub fn add_x_gate(&mut self, target: usize) -> Result<()> {
        self.add_gate(Gate::x(target))
    }

    pub fn add_y_gate(&mut self, target: usize) -> Result<()> {
        self.add_gate(Gate::y(target))
    }

    pub fn add_z_gate(&mut self, target: usize) -> Result<()> {
        self.add_gate(Gate::z(target))
    }

    pub fn add_phase_gate(&mut self, target: usize, theta: f64) -> Result<()> {
        self.add_gate(Gate::phase(target, theta))
    }

    pub fn add_swap_gate(&mut self, first: usize, second: usize) -> Result<()> {
        self.add_gate(Gate::swap(first, second))
    }

    /// Adds a measurement of each `(qubit, classic_bit)` pair.
    pub fn add_measure_gate<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.add_gate(Gate::measure(pairs))
    }

    pub fn add_controlled_hadamard_gate(&mut self, control: usize, target: usize) -> Result<()> {
        self.add_gate(Gate::controlled_hadamard(control, target))
    }

    pub fn add_cx_gate(&mut self, control: usize, target: usize) -> Result<()> {
        self.add_gate(Gate::cx(control, target))
    }

    pub fn add_cy_gate(&mut self, control: usize, target: usize) -> Result<()> {
        self.add_gate(Gate::cy(control, target))
    }

    pub fn add_cz_gate(&mut self, control: usize, target: usize) -> Result<()> {
        self.add_gate(Gate::cz(control, target))
    }

    pub fn add_controlled_phase_gate(
        &mut self,
        control: usize,
        target: usize,
        theta: f64,
    ) -> Result<()> {
        self.add_gate(Gate::controlled_phase(control, target, theta))
    }

    pub fn add_init_gate(&mut self, target: usize, state: QubitState) -> Result<()> {
        self.add_gate(Gate::init(target, state))
    }

    pub fn add_print_gate(&mut self, target: usize) -> Result<()> {
        self.add_gate(Gate::print(target))
    }

    pub fn add_circuit_gate(&mut self, gate: CircuitGate) -> Result<()> {
        self.add_gate(gate)
    }

    /// Appends clones of `other`'s gates to this circuit's program.
    ///
    /// # Errors
    /// `CircuitError::RegisterSizeMismatch` unless both circuits have the
    /// same qubit and classical-bit counts. Nothing is appended on error.
    pub fn append(&mut self, other: &Circuit) -> Result<()> {
        if other.qubit_count() != self.qubit_count()
            || other.classic_bit_count() != self.classic_bit_count()
        {
            return Err(CircuitError::RegisterSizeMismatch {
                qubits: self.qubit_count(),
                bits: self.classic_bit_count(),
                other_qubits: other.qubit_count(),
                other_bits: other.classic_bit_count(),
            });
        }
        self.gates.extend(other.gates.iter().cloned());
        Ok(())
    }

    /// Wraps a snapshot of this circuit as a gate.
    ///
    /// The returned gate has no qubit mapping yet; set one with
    /// [`CircuitGate::set_qubit_indices`] before adding it.
    pub fn to_gate(&self) -> CircuitGate {
        CircuitGate::new(Rc::new(self.clone()))
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
///
/// The first rejected gate is remembered and returned by [`Self::build`];
/// later gates are ignored once an error has been recorded.
pub struct CircuitBuilder {
    circuit: Circuit,
    error: Option<CircuitError>,
}

impl CircuitBuilder {
    pub fn new(
        engine: Rc<ProbabilityEngine>,
        qubit_count: usize,
        classic_bit_count: usize,
    ) -> Self {
        Self {
            circuit: Circuit::new(engine, qubit_count, classic_bit_count),
            error: None,
        }
    }

    /// Adds a single gate to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, gate: impl Into<Gate>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.circuit.add_gate(gate) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Adds multiple gates from an iterator to the circuit being built.
    pub fn add_ops<I>(self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        gates.into_iter().fold(self, |builder, gate| builder.add_op(gate))
    }

    pub fn hadamard(self, target: usize) -> Self {
        self.add_op(Gate::hadamard(target))
    }

    pub fn x(self, target: usize) -> Self {
        self.add_op(Gate::x(target))
    }

    pub fn cx(self, control: usize, target: usize) -> Self {
        self.add_op(Gate::cx(control, target))
    }

    pub fn measure<I>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.add_op(Gate::measure(pairs))
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Result<Circuit> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.circuit),
        }
    }
}
