//! Error handling logic

use num_complex::Complex;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Failures raised while building or executing a circuit.
///
/// Every variant is raised synchronously by the call that detected it; the
/// object being modified (a qubit, a circuit's gate list) is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircuitError {
    /// A gate or register access referenced a qubit slot that does not exist.
    #[error("Invalid qubit index {index}: circuit has {qubit_count} qubits")]
    InvalidQubitIndex {
        /// The offending index
        index: usize,
        /// Number of qubits available
        qubit_count: usize,
    },

    /// A gate or register access referenced a classical bit slot that does not exist.
    #[error("Invalid classic bit index {index}: circuit has {bit_count} classic bits")]
    InvalidClassicBitIndex {
        /// The offending index
        index: usize,
        /// Number of classical bits available
        bit_count: usize,
    },

    /// Amplitudes whose squared norms do not sum to one.
    #[error("Invalid qubit state ({alpha})|0> + ({beta})|1>: squared norm is {norm}")]
    InvalidState {
        /// Amplitude of |0>
        alpha: Complex<f64>,
        /// Amplitude of |1>
        beta: Complex<f64>,
        /// |alpha|^2 + |beta|^2
        norm: f64,
    },

    /// Swap gate whose two indices coincide.
    #[error("Cannot swap qubit {index} with itself")]
    SwapSameQubit {
        /// The repeated index
        index: usize,
    },

    /// A circuit gate mapping whose length differs from the sub-circuit's qubit count.
    #[error("Circuit gate expects {expected} qubit indices, got {actual}")]
    InvalidQubitIndicesCount {
        /// Qubit count of the embedded sub-circuit
        expected: usize,
        /// Length of the supplied mapping
        actual: usize,
    },

    /// A circuit gate mapping that names the same parent qubit twice.
    #[error("Qubit index {index} appears more than once in circuit gate mapping")]
    DuplicateQubitIndex {
        /// The repeated index
        index: usize,
    },

    /// A circuit gate without a mapping that could not be mapped onto the parent's first qubits.
    #[error(
        "Circuit gate has no qubit mapping: it needs {required} qubits, parent has {available}"
    )]
    UninitializedCircuitGate {
        /// Qubit count of the embedded sub-circuit
        required: usize,
        /// Qubit count of the parent circuit
        available: usize,
    },

    /// Appending a circuit whose registers differ in size.
    #[error(
        "Cannot append circuit with {other_qubits} qubits / {other_bits} classic bits \
         to circuit with {qubits} qubits / {bits} classic bits"
    )]
    RegisterSizeMismatch {
        /// Qubit count of the receiving circuit
        qubits: usize,
        /// Classical bit count of the receiving circuit
        bits: usize,
        /// Qubit count of the appended circuit
        other_qubits: usize,
        /// Classical bit count of the appended circuit
        other_bits: usize,
    },

    /// An algorithm parameter rejected by code built on top of the simulator.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected parameter
        message: String,
    },
}

impl CircuitError {
    /// Creates an invalid qubit index error.
    pub fn invalid_qubit(index: usize, qubit_count: usize) -> Self {
        Self::InvalidQubitIndex { index, qubit_count }
    }

    /// Creates an invalid classical bit index error.
    pub fn invalid_classic_bit(index: usize, bit_count: usize) -> Self {
        Self::InvalidClassicBitIndex { index, bit_count }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter { message: message.into() }
    }
}
