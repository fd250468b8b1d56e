// src/core/state.rs

use super::constants::TAU;
use super::error::Result;
use super::probability::ProbabilityEngine;
use crate::validation::check_normalization;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// The local state of a single qubit: `alpha|0⟩ + beta|1⟩`.
///
/// Every value of this type satisfies `|alpha|² + |beta|² ≈ 1` within the
/// error margin of the engine it was validated against. States are built
/// either from the basis constructors or through [`QubitState::new`], which
/// rejects unnormalized amplitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    alpha: Complex<f64>,
    beta: Complex<f64>,
}

impl QubitState {
    /// Creates a state from explicit amplitudes.
    ///
    /// # Errors
    /// `CircuitError::InvalidState` if the pair is not normalized within
    /// `engine`'s error margin.
    pub fn new(
        engine: &ProbabilityEngine,
        alpha: Complex<f64>,
        beta: Complex<f64>,
    ) -> Result<Self> {
        check_normalization(alpha, beta, engine)?;
        Ok(Self { alpha, beta })
    }

    /// The `|0⟩` basis state.
    pub fn zero() -> Self {
        Self {
            alpha: Complex::one(),
            beta: Complex::zero(),
        }
    }

    /// The `|1⟩` basis state.
    pub fn one() -> Self {
        Self {
            alpha: Complex::zero(),
            beta: Complex::one(),
        }
    }

    /// Draws a random state.
    ///
    /// The probability of `|0⟩` is uniform on `[0, 1)` and each amplitude
    /// carries an independent uniform phase.
    pub fn random(engine: &ProbabilityEngine) -> Result<Self> {
        let p0 = engine.probability();
        let phase_alpha = engine.probability() * TAU;
        let phase_beta = engine.probability() * TAU;
        let alpha = Complex::from_polar(p0.sqrt(), phase_alpha);
        let beta = Complex::from_polar((1.0 - p0).sqrt(), phase_beta);
        Self::new(engine, alpha, beta)
    }

    pub fn alpha(&self) -> Complex<f64> {
        self.alpha
    }

    pub fn beta(&self) -> Complex<f64> {
        self.beta
    }

    /// Probability of measuring `0`.
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of measuring `1`.
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &QubitState, tolerance: f64) -> bool {
        (self.alpha - other.alpha).norm() < tolerance && (self.beta - other.beta).norm() < tolerance
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4})|0⟩ + ({:.4})|1⟩", self.alpha, self.beta)
    }
}
