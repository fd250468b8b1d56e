// src/circuits/register.rs

use crate::core::{CircuitError, ClassicBit, ProbabilityEngine, Qubit, Result};
use crate::gates::Control;
use crate::simulation::Outcome;
use std::rc::Rc;

/// The mutable state a gate program acts on: one qubit per quantum wire and
/// one classical bit per classical wire.
#[derive(Debug, Clone)]
pub struct Register {
    qubits: Vec<Qubit>,
    classic_bits: Vec<ClassicBit>,
}

impl Register {
    /// Creates a register with every qubit in `|0⟩` and every bit at `0`.
    pub fn new(engine: &Rc<ProbabilityEngine>, qubit_count: usize, bit_count: usize) -> Self {
        Self {
            qubits: (0..qubit_count).map(|_| Qubit::new(engine.clone())).collect(),
            classic_bits: vec![ClassicBit::Zero; bit_count],
        }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubits.len()
    }

    pub fn classic_bit_count(&self) -> usize {
        self.classic_bits.len()
    }

    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    pub fn classic_bits(&self) -> &[ClassicBit] {
        &self.classic_bits
    }

    pub fn qubit(&self, index: usize) -> Result<&Qubit> {
        let count = self.qubits.len();
        self.qubits.get(index).ok_or(CircuitError::invalid_qubit(index, count))
    }

    pub fn qubit_mut(&mut self, index: usize) -> Result<&mut Qubit> {
        let count = self.qubits.len();
        self.qubits.get_mut(index).ok_or(CircuitError::invalid_qubit(index, count))
    }

    pub fn classic_bit(&self, index: usize) -> Result<ClassicBit> {
        let count = self.classic_bits.len();
        self.classic_bits
            .get(index)
            .copied()
            .ok_or(CircuitError::invalid_classic_bit(index, count))
    }

    pub fn set_classic_bit(&mut self, index: usize, bit: ClassicBit) -> Result<()> {
        let count = self.classic_bits.len();
        let slot = self
            .classic_bits
            .get_mut(index)
            .ok_or(CircuitError::invalid_classic_bit(index, count))?;
        *slot = bit;
        Ok(())
    }

    /// Exchanges the full states of two qubits.
    pub fn swap_qubits(&mut self, first: usize, second: usize) -> Result<()> {
        if first == second {
            return Err(CircuitError::SwapSameQubit { index: first });
        }
        self.qubit(first)?;
        self.qubit(second)?;
        self.qubits.swap(first, second);
        Ok(())
    }

    /// Reads the value a controlled gate is conditioned on.
    ///
    /// A quantum control is measured, collapsing the control qubit. A
    /// classical control reads the stored bit.
    pub fn read_control(&mut self, control: Control) -> Result<bool> {
        match control {
            Control::Quantum(index) => Ok(self.qubit_mut(index)?.measure().is_one()),
            Control::Classical(index) => Ok(self.classic_bit(index)?.is_one()),
        }
    }

    /// The line a print gate writes for qubit `index`, e.g.
    /// `q1: (0.0000+0.0000i)|0⟩ + (1.0000+0.0000i)|1⟩`.
    pub fn render_qubit(&self, index: usize) -> Result<String> {
        Ok(format!("q{}: {}", index, self.qubit(index)?))
    }

    /// Returns every qubit to `|0⟩` and every bit to `0`.
    pub fn reset(&mut self) {
        self.qubits.iter_mut().for_each(Qubit::reset);
        self.classic_bits.fill(ClassicBit::Zero);
    }

    /// Snapshot of the classical bits.
    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.classic_bits.clone())
    }
}
