// src/simulation/mod.rs

//! Executes circuits: single runs, resets, and the repeated-trial loop that
//! turns a probabilistic program into an outcome histogram.

mod results;

// Re-export the main public interface types
pub use results::{CompoundResult, Outcome};

use crate::circuits::{Circuit, Register};
use crate::core::Result;
use crate::gates::Gate;

impl Circuit {
    /// Applies every gate once, in order, to the current register state and
    /// returns the resulting classical bits.
    ///
    /// The register is not reset first; call [`Circuit::reset`] for a fresh
    /// run.
    pub fn run(&mut self) -> Result<Outcome> {
        execute(&self.gates, &mut self.register)?;
        Ok(self.register.outcome())
    }

    /// Returns every qubit to `|0⟩` and every classical bit to `0`.
    /// The gate program is kept.
    pub fn reset(&mut self) {
        self.register.reset();
    }

    /// Runs `trials` independent {reset, run} cycles and counts the outcomes.
    ///
    /// The register holds the final state of the last trial afterwards.
    pub fn simulate(&mut self, trials: usize) -> Result<CompoundResult> {
        log::debug!(
            "simulating {} trials of {} gates on {} qubits",
            trials,
            self.len(),
            self.qubit_count()
        );
        let mut compound = CompoundResult::new();
        for _ in 0..trials {
            self.reset();
            let outcome = self.run()?;
            compound.add(&outcome);
        }
        log::debug!("simulation produced {} distinct outcomes", compound.len());
        Ok(compound)
    }

    /// A register shaped like this circuit's, in its initial state.
    pub(crate) fn fresh_register(&self) -> Register {
        Register::new(self.engine(), self.qubit_count(), self.classic_bit_count())
    }

    /// Runs this circuit's program on a register other than its own.
    pub(crate) fn execute(&self, register: &mut Register) -> Result<()> {
        execute(&self.gates, register)
    }
}

fn execute(gates: &[Gate], register: &mut Register) -> Result<()> {
    for gate in gates {
        gate.apply(register)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassicBit, ProbabilityEngine, QubitState};
    use std::rc::Rc;

    fn circuit(qubits: usize, bits: usize) -> Circuit {
        Circuit::new(Rc::new(ProbabilityEngine::with_seed(2024)), qubits, bits)
    }

    #[test]
    fn test_run_empty_circuit() -> Result<()> {
        let mut c = circuit(2, 3);
        assert_eq!(c.run()?.to_string(), "000");
        Ok(())
    }

    #[test]
    fn test_run_does_not_reset() -> Result<()> {
        let mut c = circuit(1, 1);
        c.add_x_gate(0)?;
        c.run()?;
        assert_eq!(*c.qubit(0)?.state(), QubitState::one());
        c.run()?;
        assert_eq!(*c.qubit(0)?.state(), QubitState::zero());
        Ok(())
    }

    #[test]
    fn test_reset_keeps_program() -> Result<()> {
        let mut c = circuit(1, 1);
        c.add_x_gate(0)?;
        c.add_measure_gate([(0, 0)])?;
        c.run()?;
        assert_eq!(c.classic_bit(0)?, ClassicBit::One);
        c.reset();
        assert_eq!(c.classic_bit(0)?, ClassicBit::Zero);
        assert_eq!(*c.qubit(0)?.state(), QubitState::zero());
        assert_eq!(c.len(), 2);
        Ok(())
    }

    #[test]
    fn test_simulate_deterministic_program() -> Result<()> {
        let mut c = circuit(2, 2);
        c.add_x_gate(1)?;
        c.add_measure_gate([(0, 0), (1, 1)])?;
        let result = c.simulate(250)?;
        assert_eq!(result.len(), 1);
        assert_eq!(result.count("10"), 250);
        Ok(())
    }

    #[test]
    fn test_simulate_zero_trials() -> Result<()> {
        let mut c = circuit(1, 1);
        c.add_hadamard_gate(0)?;
        let result = c.simulate(0)?;
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
        Ok(())
    }

    #[test]
    fn test_execute_on_foreign_register() -> Result<()> {
        let mut c = circuit(1, 0);
        c.add_x_gate(0)?;
        let mut register = c.fresh_register();
        c.execute(&mut register)?;
        assert_eq!(*register.qubit(0)?.state(), QubitState::one());
        assert_eq!(*c.qubit(0)?.state(), QubitState::zero());
        Ok(())
    }
}
