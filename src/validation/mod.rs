// src/validation/mod.rs

//! Checks shared by states, gates and registers: amplitude normalization and
//! register index bounds.

use crate::core::{CircuitError, ProbabilityEngine, Result};
use num_complex::Complex;

/// Squared norm `|alpha|² + |beta|²` of an amplitude pair.
pub fn squared_norm(alpha: Complex<f64>, beta: Complex<f64>) -> f64 {
    alpha.norm_sqr() + beta.norm_sqr()
}

/// Checks that the amplitude pair is normalized within the engine's error margin.
///
/// # Returns
/// * `Ok(())` if `|alpha|² + |beta|²` compares equal to 1.
/// * `Err(CircuitError::InvalidState)` otherwise.
pub fn check_normalization(
    alpha: Complex<f64>,
    beta: Complex<f64>,
    engine: &ProbabilityEngine,
) -> Result<()> {
    let norm = squared_norm(alpha, beta);
    if engine.compare(norm, 1.0) {
        Ok(())
    } else {
        Err(CircuitError::InvalidState { alpha, beta, norm })
    }
}

/// Checks that `index` addresses one of `qubit_count` qubits.
pub fn check_qubit_index(index: usize, qubit_count: usize) -> Result<()> {
    if index < qubit_count {
        Ok(())
    } else {
        Err(CircuitError::invalid_qubit(index, qubit_count))
    }
}

/// Checks that `index` addresses one of `bit_count` classical bits.
pub fn check_classic_bit_index(index: usize, bit_count: usize) -> Result<()> {
    if index < bit_count {
        Ok(())
    } else {
        Err(CircuitError::invalid_classic_bit(index, bit_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::FRAC_1_SQRT_2;

    #[test]
    fn test_normalized_pairs_pass() {
        let engine = ProbabilityEngine::new();
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        let basis = check_normalization(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), &engine);
        assert!(basis.is_ok());
        assert!(check_normalization(h, Complex::new(0.0, -FRAC_1_SQRT_2), &engine).is_ok());
    }

    #[test]
    fn test_unnormalized_pair_fails() {
        let engine = ProbabilityEngine::new();
        let err = check_normalization(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0), &engine)
            .unwrap_err();
        match err {
            CircuitError::InvalidState { norm, .. } => assert!((norm - 2.0).abs() < 1e-12),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_index_bounds() {
        assert!(check_qubit_index(2, 3).is_ok());
        assert_eq!(check_qubit_index(3, 3), Err(CircuitError::invalid_qubit(3, 3)));
        assert!(check_classic_bit_index(0, 1).is_ok());
        assert_eq!(check_classic_bit_index(0, 0), Err(CircuitError::invalid_classic_bit(0, 0)));
    }
}
