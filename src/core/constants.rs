//! Numeric constants shared by the simulator.

/// Default tolerance used by [`crate::ProbabilityEngine::compare`].
pub const DEFAULT_ERROR_MARGIN: f64 = 2e-10;

/// `1/√2`, the Hadamard scaling factor.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Used for phase angles (`e^(iθ)`)
pub const PI: f64 = std::f64::consts::PI;

/// Full turn, the range of random phases.
pub const TAU: f64 = std::f64::consts::TAU;
