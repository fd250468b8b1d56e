//! Property-based tests for qcircuit using proptest
//!
//! Checks normalization and gate identities over arbitrary single-qubit states.

use num_complex::Complex;
use proptest::prelude::*;
use qcircuit::{CircuitError, Gate, ProbabilityEngine, QubitState, Register};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

const TOLERANCE: f64 = 1e-9;

/// `(cos θ·e^(iφ₁), sin θ·e^(iφ₂))` is normalized for every θ, φ₁, φ₂.
fn amplitudes(theta: f64, phi_a: f64, phi_b: f64) -> (Complex<f64>, Complex<f64>) {
    (
        Complex::from_polar(theta.cos(), phi_a),
        Complex::from_polar(theta.sin(), phi_b),
    )
}

fn register_with(alpha: Complex<f64>, beta: Complex<f64>) -> Register {
    let mut register = Register::new(&Rc::new(ProbabilityEngine::with_seed(5)), 2, 1);
    register
        .qubit_mut(0)
        .and_then(|qubit| qubit.set_amplitudes(alpha, beta))
        .expect("normalized amplitudes are accepted");
    register
}

// ============================================================================
// Normalization
// ============================================================================

proptest! {
    /// Property: every point on the Bloch sphere is a valid state
    #[test]
    fn normalized_states_are_accepted(
        theta in 0.0f64..FRAC_PI_2,
        phi_a in 0.0f64..TAU,
        phi_b in 0.0f64..TAU
    ) {
        let engine = ProbabilityEngine::new();
        let (alpha, beta) = amplitudes(theta, phi_a, phi_b);
        let state = QubitState::new(&engine, alpha, beta);
        prop_assert!(state.is_ok(), "rejected ({}, {})", alpha, beta);
    }

    /// Property: scaling a valid state away from unit norm is rejected and
    /// the qubit keeps its previous state
    #[test]
    fn scaled_states_are_rejected(
        theta in 0.0f64..FRAC_PI_2,
        phi_a in 0.0f64..TAU,
        phi_b in 0.0f64..TAU,
        scale in prop_oneof![0.1f64..0.99, 1.01f64..3.0]
    ) {
        let (alpha, beta) = amplitudes(theta, phi_a, phi_b);
        let mut register = register_with(alpha, beta);
        let qubit = register.qubit_mut(0).expect("qubit 0 exists");

        let result = qubit.set_amplitudes(alpha * scale, beta * scale);
        let is_invalid_state = matches!(result, Err(CircuitError::InvalidState { .. }));
        prop_assert!(is_invalid_state);
        prop_assert_eq!(qubit.alpha(), alpha);
        prop_assert_eq!(qubit.beta(), beta);
    }

    /// Property: probabilities of a valid state sum to one
    #[test]
    fn probabilities_sum_to_one(
        theta in 0.0f64..FRAC_PI_2,
        phi_a in 0.0f64..TAU,
        phi_b in 0.0f64..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, phi_a, phi_b);
        let state = QubitState::new(&ProbabilityEngine::new(), alpha, beta).expect("valid state");
        prop_assert!((state.probability_zero() + state.probability_one() - 1.0).abs() < TOLERANCE);
    }
}

// ============================================================================
// Gate Identities
// ============================================================================

proptest! {
    /// Property: X is an involution
    #[test]
    fn x_twice_is_identity(
        theta in 0.0f64..FRAC_PI_2,
        phi_a in 0.0f64..TAU,
        phi_b in 0.0f64..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, phi_a, phi_b);
        let mut register = register_with(alpha, beta);
        Gate::x(0).apply(&mut register).expect("x applies");
        Gate::x(0).apply(&mut register).expect("x applies");
        let qubit = register.qubit(0).expect("qubit 0 exists");
        prop_assert!((qubit.alpha() - alpha).norm() < TOLERANCE);
        prop_assert!((qubit.beta() - beta).norm() < TOLERANCE);
    }

    /// Property: H is an involution
    #[test]
    fn hadamard_twice_is_identity(
        theta in 0.0f64..FRAC_PI_2,
        phi_a in 0.0f64..TAU,
        phi_b in 0.0f64..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, phi_a, phi_b);
        let mut register = register_with(alpha, beta);
        Gate::hadamard(0).apply(&mut register).expect("h applies");
        Gate::hadamard(0).apply(&mut register).expect("h applies");
        let qubit = register.qubit(0).expect("qubit 0 exists");
        prop_assert!((qubit.alpha() - alpha).norm() < TOLERANCE);
        prop_assert!((qubit.beta() - beta).norm() < TOLERANCE);
    }

    /// Property: phase shifts compose additively and leave |alpha| alone
    #[test]
    fn phase_shifts_compose(
        theta in 0.0f64..FRAC_PI_2,
        first in -TAU..TAU,
        second in -TAU..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, 0.0, 0.0);
        let mut split = register_with(alpha, beta);
        Gate::phase(0, first).apply(&mut split).expect("phase applies");
        Gate::phase(0, second).apply(&mut split).expect("phase applies");

        let mut joined = register_with(alpha, beta);
        Gate::phase(0, first + second).apply(&mut joined).expect("phase applies");

        let a = split.qubit(0).expect("qubit 0 exists");
        let b = joined.qubit(0).expect("qubit 0 exists");
        prop_assert!((a.alpha() - alpha).norm() < TOLERANCE);
        prop_assert!((a.beta() - b.beta()).norm() < TOLERANCE);
    }

    /// Property: swapping twice restores both qubits
    #[test]
    fn swap_twice_is_identity(
        theta in 0.0f64..FRAC_PI_2,
        phi_b in 0.0f64..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, 0.0, phi_b);
        let mut register = register_with(alpha, beta);
        Gate::swap(0, 1).apply(&mut register).expect("swap applies");
        prop_assert_eq!(*register.qubit(0).expect("qubit 0 exists").state(), QubitState::zero());
        Gate::swap(1, 0).apply(&mut register).expect("swap applies");
        let qubit = register.qubit(0).expect("qubit 0 exists");
        prop_assert_eq!(qubit.alpha(), alpha);
        prop_assert_eq!(qubit.beta(), beta);
    }

    /// Property: a measurement always collapses to a basis state matching the bit
    #[test]
    fn measurement_collapses(
        theta in 0.0f64..FRAC_PI_2,
        phi_b in 0.0f64..TAU
    ) {
        let (alpha, beta) = amplitudes(theta, 0.0, phi_b);
        let mut register = register_with(alpha, beta);
        Gate::measure([(0, 0)]).apply(&mut register).expect("measure applies");
        let bit = register.classic_bit(0).expect("bit 0 exists");
        let expected = if bit.is_one() { QubitState::one() } else { QubitState::zero() };
        prop_assert_eq!(*register.qubit(0).expect("qubit 0 exists").state(), expected);
    }
}
