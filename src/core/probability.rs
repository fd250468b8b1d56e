// src/core/probability.rs

//! The random source behind every measurement, and the tolerant float
//! comparison used to validate qubit states.

use super::constants::DEFAULT_ERROR_MARGIN;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;

/// Configuration for a [`ProbabilityEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Tolerance used by [`ProbabilityEngine::compare`].
    pub error_margin: f64,
    /// Fixed seed for the random stream. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_margin: DEFAULT_ERROR_MARGIN,
            seed: None,
        }
    }
}

/// Uniform random source plus epsilon comparison.
///
/// One engine is shared (through `Rc`) by every qubit of a circuit so that
/// all measurements draw from the same stream. The stream is seeded once,
/// when the engine is built; drawing is the only mutation, hence the
/// `RefCell` around the generator.
pub struct ProbabilityEngine {
    error_margin: f64,
    rng: RefCell<StdRng>,
}

impl ProbabilityEngine {
    /// Creates an engine with the default error margin and an OS-derived seed.
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    /// Creates an engine with the given error margin.
    pub fn with_error_margin(error_margin: f64) -> Self {
        Self::from_config(EngineConfig {
            error_margin,
            ..Default::default()
        })
    }

    /// Creates a reproducible engine.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_config(EngineConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// Creates an engine from an explicit configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            error_margin: config.error_margin,
            rng: RefCell::new(rng),
        }
    }

    /// Draws a fresh uniform sample from `[0, 1)`.
    pub fn probability(&self) -> f64 {
        self.rng.borrow_mut().random::<f64>()
    }

    /// Returns `true` iff `|a - b| < error_margin`.
    pub fn compare(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.error_margin
    }

    /// The tolerance used by [`Self::compare`].
    pub fn error_margin(&self) -> f64 {
        self.error_margin
    }
}

impl Default for ProbabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbabilityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilityEngine")
            .field("error_margin", &self.error_margin)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_in_unit_interval() {
        let engine = ProbabilityEngine::with_seed(11);
        for _ in 0..10_000 {
            let p = engine.probability();
            assert!((0.0..1.0).contains(&p), "sample {} outside [0, 1)", p);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a = ProbabilityEngine::with_seed(42);
        let b = ProbabilityEngine::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.probability(), b.probability());
        }
    }

    #[test]
    fn test_mean_is_near_one_half() {
        let engine = ProbabilityEngine::with_seed(3);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| engine.probability()).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean {} too far from 0.5", mean);
    }

    #[test]
    fn test_compare_uses_margin() {
        let engine = ProbabilityEngine::new();
        assert!(engine.compare(1.0, 1.0 + 1e-11));
        assert!(!engine.compare(1.0, 1.0 + 1e-9));

        let loose = ProbabilityEngine::with_error_margin(1e-3);
        assert!(loose.compare(1.0, 1.0005));
        assert_eq!(loose.error_margin(), 1e-3);
    }
}
