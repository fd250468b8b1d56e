// src/lib.rs

//! `qcircuit` - A library for simulating small quantum circuits
//!
//! Each qubit carries its own pair of complex amplitudes. Gates are applied in
//! order, measurements collapse qubits with draws from a shared
//! [`ProbabilityEngine`], and [`Circuit::simulate`] repeats a program many
//! times to build a histogram of classical outcomes.
//!
//! There is no joint N-qubit state vector: correlations between qubits come
//! from measurement-conditioned gates, so a controlled gate measures (and
//! collapses) its control qubit.

pub mod core;
pub mod gates;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{
    CircuitError, ClassicBit, EngineConfig, ProbabilityEngine, Qubit, QubitState, Result,
};
pub use crate::gates::{CircuitGate, Control, Gate};
pub use crate::circuits::{Circuit, CircuitBuilder, Register};
pub use crate::simulation::{CompoundResult, Outcome};
pub use crate::validation::{check_classic_bit_index, check_normalization, check_qubit_index};

// Example 1: Bell pair
// Prepares a superposition, conditions a flip on it and measures both qubits.
// Only correlated outcomes can appear.
/// ```
/// use qcircuit::{Circuit, CircuitError, ProbabilityEngine};
/// use std::rc::Rc;
///
/// let engine = Rc::new(ProbabilityEngine::with_seed(7));
/// let mut circuit = Circuit::new(engine, 2, 2);
/// circuit.add_hadamard_gate(0)?;
/// circuit.add_cx_gate(0, 1)?;
/// circuit.add_measure_gate([(0, 0), (1, 1)])?;
///
/// println!("{}", circuit);
/// let result = circuit.simulate(1000)?;
/// println!("{}", result);
///
/// assert_eq!(result.count("00") + result.count("11"), 1000);
/// assert_eq!(result.count("01") + result.count("10"), 0);
/// # Ok::<(), CircuitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Sub-circuit as a gate
// Builds a one-qubit flip circuit, embeds it on qubit 1 of a parent and
// controls it classically.
/// ```
/// use qcircuit::{Circuit, CircuitError, ClassicBit, ProbabilityEngine, QubitState};
/// use std::rc::Rc;
///
/// let engine = Rc::new(ProbabilityEngine::with_seed(7));
///
/// let mut flip = Circuit::with_qubits(engine.clone(), 1);
/// flip.add_x_gate(0)?;
/// let flip_gate = flip.to_gate().with_name("flip").with_qubit_indices(vec![1])?;
///
/// let mut parent = Circuit::new(engine, 2, 1);
/// parent.add_x_gate(0)?;
/// parent.add_measure_gate([(0, 0)])?;
/// parent.add_gate(flip_gate.make_controlled(0, true))?;
///
/// let outcome = parent.run()?;
/// assert_eq!(outcome.bit(0), Some(ClassicBit::One));
/// assert_eq!(*parent.qubit(1)?.state(), QubitState::one());
/// # Ok::<(), CircuitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
