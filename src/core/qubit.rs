// src/core/qubit.rs

use super::classic_bit::ClassicBit;
use super::error::Result;
use super::probability::ProbabilityEngine;
use super::state::QubitState;
use crate::validation::check_normalization;
use num_complex::Complex;
use std::fmt;
use std::rc::Rc;

/// A single qubit: its local state plus the engine its measurements draw from.
///
/// Each qubit is modeled independently; there is no joint multi-qubit state.
/// Correlations between qubits arise only from measurement-conditioned gates.
#[derive(Debug, Clone)]
pub struct Qubit {
    state: QubitState,
    engine: Rc<ProbabilityEngine>,
}

impl Qubit {
    /// Creates a qubit in `|0⟩`.
    pub fn new(engine: Rc<ProbabilityEngine>) -> Self {
        Self {
            state: QubitState::zero(),
            engine,
        }
    }

    /// Creates a qubit in the given state, revalidated against `engine`.
    pub fn with_state(engine: Rc<ProbabilityEngine>, state: QubitState) -> Result<Self> {
        let mut qubit = Self::new(engine);
        qubit.set_state(state)?;
        Ok(qubit)
    }

    pub fn state(&self) -> &QubitState {
        &self.state
    }

    pub fn alpha(&self) -> Complex<f64> {
        self.state.alpha()
    }

    pub fn beta(&self) -> Complex<f64> {
        self.state.beta()
    }

    pub fn engine(&self) -> &Rc<ProbabilityEngine> {
        &self.engine
    }

    /// Overwrites the state with `state`.
    ///
    /// The state is checked against this qubit's own engine, whose margin may
    /// be tighter than the one it was built with. On failure the qubit keeps
    /// its previous state.
    pub fn set_state(&mut self, state: QubitState) -> Result<()> {
        self.set_amplitudes(state.alpha(), state.beta())
    }

    /// Overwrites the amplitudes. On failure the qubit keeps its previous state.
    pub fn set_amplitudes(&mut self, alpha: Complex<f64>, beta: Complex<f64>) -> Result<()> {
        self.state = QubitState::new(&self.engine, alpha, beta)?;
        Ok(())
    }

    /// Applies a single-qubit transform `(alpha, beta) -> f(alpha, beta)`.
    pub(crate) fn transform<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(Complex<f64>, Complex<f64>) -> (Complex<f64>, Complex<f64>),
    {
        let (alpha, beta) = f(self.state.alpha(), self.state.beta());
        self.set_amplitudes(alpha, beta)
    }

    /// Copies the amplitudes of `other` into this qubit, keeping this
    /// qubit's engine.
    pub(crate) fn copy_state_from(&mut self, other: &Qubit) -> Result<()> {
        check_normalization(other.alpha(), other.beta(), &self.engine)?;
        self.state = other.state;
        Ok(())
    }

    /// Measures the qubit.
    ///
    /// Draws one sample `p`; if `p < |alpha|²` the qubit collapses to `|0⟩`
    /// and `Zero` is returned, otherwise it collapses to `|1⟩` and `One` is
    /// returned. The read is destructive.
    pub fn measure(&mut self) -> ClassicBit {
        let sample = self.engine.probability();
        if sample < self.state.probability_zero() {
            self.state = QubitState::zero();
            ClassicBit::Zero
        } else {
            self.state = QubitState::one();
            ClassicBit::One
        }
    }

    /// Returns the qubit to `|0⟩`.
    pub fn reset(&mut self) {
        self.state = QubitState::zero();
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CircuitError;
    use crate::core::constants::FRAC_1_SQRT_2;

    fn engine() -> Rc<ProbabilityEngine> {
        Rc::new(ProbabilityEngine::with_seed(1234))
    }

    #[test]
    fn test_measure_basis_states_is_deterministic() -> Result<()> {
        let mut zero = Qubit::new(engine());
        let mut one = Qubit::with_state(engine(), QubitState::one())?;
        for _ in 0..100 {
            assert_eq!(zero.measure(), ClassicBit::Zero);
            assert_eq!(one.measure(), ClassicBit::One);
        }
        Ok(())
    }

    #[test]
    fn test_measure_collapses_state() -> Result<()> {
        let mut qubit = Qubit::new(engine());
        qubit.set_amplitudes(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0))?;
        let first = qubit.measure();
        let expected = if first.is_one() { QubitState::one() } else { QubitState::zero() };
        assert_eq!(*qubit.state(), expected);
        // Repeated reads agree with the first one.
        for _ in 0..50 {
            assert_eq!(qubit.measure(), first);
        }
        Ok(())
    }

    #[test]
    fn test_measure_statistics_follow_amplitudes() -> Result<()> {
        let engine = engine();
        let alpha = Complex::new(0.6, 0.0);
        let beta = Complex::new(0.0, 0.8);
        let trials = 20_000;
        let mut zeros = 0;
        for _ in 0..trials {
            let mut qubit = Qubit::new(engine.clone());
            qubit.set_amplitudes(alpha, beta)?;
            if qubit.measure().is_zero() {
                zeros += 1;
            }
        }
        let frequency = zeros as f64 / trials as f64;
        assert!((frequency - 0.36).abs() < 0.02, "frequency of 0 was {}", frequency);
        Ok(())
    }

    #[test]
    fn test_invalid_set_keeps_previous_state() -> Result<()> {
        let mut qubit = Qubit::new(engine());
        qubit.set_state(QubitState::one())?;
        let err = qubit.set_amplitudes(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        assert!(matches!(err, Err(CircuitError::InvalidState { .. })));
        assert_eq!(*qubit.state(), QubitState::one());
        Ok(())
    }

    #[test]
    fn test_reset_returns_to_zero() -> Result<()> {
        let mut qubit = Qubit::with_state(engine(), QubitState::one())?;
        qubit.reset();
        assert_eq!(*qubit.state(), QubitState::zero());
        Ok(())
    }
}
