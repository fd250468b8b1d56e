// src/core/mod.rs

//! Core data structures and types

pub mod classic_bit;
pub mod error;
pub mod probability;
pub mod qubit;
pub mod state;

// Re-export public types for convenient access via `qcircuit::core::TypeName`
pub use classic_bit::ClassicBit;
pub use error::{CircuitError, Result};
pub use probability::{EngineConfig, ProbabilityEngine};
pub use qubit::Qubit;
pub use state::QubitState;

pub mod constants;
pub use constants::{DEFAULT_ERROR_MARGIN, PI};
