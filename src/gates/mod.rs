// src/gates/mod.rs

//! Defines the gates a circuit is programmed with.
//!
//! Every gate is a value of the [`Gate`] enum. Controlled forms are not
//! separate variants per base gate: any gate, including a whole embedded
//! sub-circuit, can be wrapped in [`Gate::Controlled`] by
//! [`Gate::make_controlled`]. A gate is immutable once built; circuits own
//! their gates and clone them when composed.

mod subcircuit;

pub use subcircuit::CircuitGate;

use crate::circuits::Register;
use crate::circuits::drawing::{Cell, Column, Drawings};
use crate::core::constants::FRAC_1_SQRT_2;
use crate::core::{CircuitError, QubitState, Result};
use crate::validation::{check_classic_bit_index, check_qubit_index};
use num_complex::Complex;
use std::fmt;

/// The wire a controlled gate is conditioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// A qubit, measured (and collapsed) when the gate is applied.
    Quantum(usize),
    /// A classical bit, read without side effects.
    Classical(usize),
}

impl Control {
    pub fn new(index: usize, is_classical: bool) -> Self {
        if is_classical { Control::Classical(index) } else { Control::Quantum(index) }
    }

    pub fn index(self) -> usize {
        match self {
            Control::Quantum(index) | Control::Classical(index) => index,
        }
    }

    pub fn is_classical(self) -> bool {
        matches!(self, Control::Classical(_))
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Quantum(index) => write!(f, "q{}", index),
            Control::Classical(index) => write!(f, "c{}", index),
        }
    }
}

/// A single step of a circuit's program.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// `alpha' = (alpha + beta)/√2`, `beta' = (alpha - beta)/√2`.
    Hadamard { target: usize },
    /// Pauli X: swaps the amplitudes.
    X { target: usize },
    /// Pauli Y as modeled here: `alpha' = beta`, `beta' = -alpha`.
    Y { target: usize },
    /// Pauli Z: negates `beta`.
    Z { target: usize },
    /// `beta' = beta·e^(iθ)`.
    Phase { target: usize, theta: f64 },
    /// Exchanges the full states of two distinct qubits.
    Swap { first: usize, second: usize },
    /// Measures each `(qubit, classic_bit)` pair in order and stores the result.
    Measure { pairs: Vec<(usize, usize)> },
    /// Applies `gate` only when the control reads one.
    Controlled { control: Control, gate: Box<Gate> },
    /// A shared sub-circuit acting on a subset of the qubits.
    SubCircuit(CircuitGate),
    /// Overwrites a qubit's state.
    Init { target: usize, state: QubitState },
    /// Writes a qubit's state to stdout.
    Print { target: usize },
}

impl Gate {
    pub fn hadamard(target: usize) -> Self {
        Gate::Hadamard { target }
    }

    pub fn x(target: usize) -> Self {
        Gate::X { target }
    }

    pub fn y(target: usize) -> Self {
        Gate::Y { target }
    }

    pub fn z(target: usize) -> Self {
        Gate::Z { target }
    }

    pub fn phase(target: usize, theta: f64) -> Self {
        Gate::Phase { target, theta }
    }

    pub fn swap(first: usize, second: usize) -> Self {
        Gate::Swap { first, second }
    }

    pub fn measure<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Gate::Measure {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn controlled_hadamard(control: usize, target: usize) -> Self {
        Gate::hadamard(target).make_controlled(control, false)
    }

    pub fn cx(control: usize, target: usize) -> Self {
        Gate::x(target).make_controlled(control, false)
    }

    pub fn cy(control: usize, target: usize) -> Self {
        Gate::y(target).make_controlled(control, false)
    }

    pub fn cz(control: usize, target: usize) -> Self {
        Gate::z(target).make_controlled(control, false)
    }

    pub fn controlled_phase(control: usize, target: usize, theta: f64) -> Self {
        Gate::phase(target, theta).make_controlled(control, false)
    }

    pub fn init(target: usize, state: QubitState) -> Self {
        Gate::Init { target, state }
    }

    pub fn print(target: usize) -> Self {
        Gate::Print { target }
    }

    /// Wraps this gate so that it only runs when the control reads one.
    ///
    /// With `is_classical == false` the control is qubit `control`, measured
    /// at apply time; otherwise it is classical bit `control`.
    pub fn make_controlled(self, control: usize, is_classical: bool) -> Gate {
        self.controlled_by(Control::new(control, is_classical))
    }

    pub fn controlled_by(self, control: Control) -> Gate {
        Gate::Controlled {
            control,
            gate: Box::new(self),
        }
    }

    /// Qubit indices this gate reads or writes, including quantum controls.
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Gate::Hadamard { target }
            | Gate::X { target }
            | Gate::Y { target }
            | Gate::Z { target }
            | Gate::Phase { target, .. }
            | Gate::Init { target, .. }
            | Gate::Print { target } => vec![*target],
            Gate::Swap { first, second } => vec![*first, *second],
            Gate::Measure { pairs } => pairs.iter().map(|(qubit, _)| *qubit).collect(),
            Gate::Controlled { control, gate } => {
                let mut qubits = gate.qubits();
                if let Control::Quantum(index) = control {
                    qubits.push(*index);
                }
                qubits
            }
            Gate::SubCircuit(gate) => gate.qubit_indices().to_vec(),
        }
    }

    /// Checks every referenced index against the given register sizes.
    ///
    /// # Errors
    /// * `InvalidQubitIndex` / `InvalidClassicBitIndex` for out-of-range slots.
    /// * `SwapSameQubit` for a swap of a qubit with itself, whatever its index.
    /// * `UninitializedCircuitGate` for a sub-circuit without a mapping.
    pub fn verify(&self, qubit_count: usize, bit_count: usize) -> Result<()> {
        match self {
            Gate::Hadamard { target }
            | Gate::X { target }
            | Gate::Y { target }
            | Gate::Z { target }
            | Gate::Phase { target, .. }
            | Gate::Init { target, .. }
            | Gate::Print { target } => check_qubit_index(*target, qubit_count),
            Gate::Swap { first, second } => {
                if first == second {
                    return Err(CircuitError::SwapSameQubit { index: *first });
                }
                check_qubit_index(*first, qubit_count)?;
                check_qubit_index(*second, qubit_count)
            }
            Gate::Measure { pairs } => {
                for (qubit, bit) in pairs {
                    check_qubit_index(*qubit, qubit_count)?;
                    check_classic_bit_index(*bit, bit_count)?;
                }
                Ok(())
            }
            Gate::Controlled { control, gate } => {
                // A quantum control may also be a target: it is measured
                // before the inner gate runs.
                match control {
                    Control::Quantum(index) => check_qubit_index(*index, qubit_count)?,
                    Control::Classical(index) => check_classic_bit_index(*index, bit_count)?,
                }
                gate.verify(qubit_count, bit_count)
            }
            Gate::SubCircuit(gate) => gate.verify(qubit_count, bit_count),
        }
    }

    /// Applies the gate to `register`.
    pub fn apply(&self, register: &mut Register) -> Result<()> {
        log::trace!("applying {}", self);
        match self {
            Gate::Hadamard { target } => register.qubit_mut(*target)?.transform(|alpha, beta| {
                ((alpha + beta) * FRAC_1_SQRT_2, (alpha - beta) * FRAC_1_SQRT_2)
            }),
            Gate::X { target } => {
                register.qubit_mut(*target)?.transform(|alpha, beta| (beta, alpha))
            }
            Gate::Y { target } => {
                register.qubit_mut(*target)?.transform(|alpha, beta| (beta, -alpha))
            }
            Gate::Z { target } => {
                register.qubit_mut(*target)?.transform(|alpha, beta| (alpha, -beta))
            }
            Gate::Phase { target, theta } => {
                let shift = Complex::from_polar(1.0, *theta);
                register.qubit_mut(*target)?.transform(|alpha, beta| (alpha, beta * shift))
            }
            Gate::Swap { first, second } => register.swap_qubits(*first, *second),
            Gate::Measure { pairs } => {
                for &(qubit, bit) in pairs {
                    let value = register.qubit_mut(qubit)?.measure();
                    register.set_classic_bit(bit, value)?;
                }
                Ok(())
            }
            Gate::Controlled { control, gate } => {
                if register.read_control(*control)? {
                    gate.apply(register)?;
                }
                Ok(())
            }
            Gate::SubCircuit(gate) => gate.apply(register),
            Gate::Init { target, state } => register.qubit_mut(*target)?.set_state(*state),
            Gate::Print { target } => {
                println!("{}", register.render_qubit(*target)?);
                Ok(())
            }
        }
    }

    /// One three-line strip per wire (qubits first, then classical bits)
    /// depicting this gate. Pure; the circuit is not touched.
    pub fn drawings(&self, qubit_count: usize, bit_count: usize) -> Drawings {
        let mut column = Column::new(qubit_count, bit_count);
        self.draw_into(&mut column);
        column.render()
    }

    fn draw_into(&self, column: &mut Column) {
        match self {
            Gate::Hadamard { target } => column.put_qubit(*target, Cell::boxed("H")),
            Gate::X { target } => column.put_qubit(*target, Cell::boxed("X")),
            Gate::Y { target } => column.put_qubit(*target, Cell::boxed("Y")),
            Gate::Z { target } => column.put_qubit(*target, Cell::boxed("Z")),
            Gate::Phase { target, theta } => {
                column.put_qubit(*target, Cell::boxed(format!("P({:.2})", theta)))
            }
            Gate::Swap { first, second } => {
                column.put_qubit(*first, Cell::Swap);
                column.put_qubit(*second, Cell::Swap);
            }
            Gate::Measure { pairs } => {
                for (qubit, bit) in pairs {
                    column.put_qubit(*qubit, Cell::boxed("M"));
                    column.put_bit(*bit, Cell::Sink);
                }
            }
            Gate::Controlled { control, gate } => {
                gate.draw_into(column);
                match control {
                    Control::Quantum(index) => column.put_qubit(*index, Cell::Control),
                    Control::Classical(index) => column.put_bit(*index, Cell::Control),
                }
            }
            Gate::SubCircuit(gate) => {
                for index in gate.qubit_indices() {
                    column.put_qubit(*index, Cell::boxed(gate.name()));
                }
            }
            Gate::Init { target, .. } => column.put_qubit(*target, Cell::boxed("Init")),
            Gate::Print { target } => column.put_qubit(*target, Cell::boxed("Print")),
        }
    }

    /// Gives every unmapped sub-circuit (also inside controlled wrappers) the
    /// identity mapping onto the first qubits of a `qubit_count` register.
    pub(crate) fn assign_default_mappings(&mut self, qubit_count: usize) -> Result<()> {
        match self {
            Gate::SubCircuit(gate) if !gate.is_initialized() => {
                let required = gate.circuit().qubit_count();
                if required > qubit_count {
                    return Err(CircuitError::UninitializedCircuitGate {
                        required,
                        available: qubit_count,
                    });
                }
                log::warn!(
                    "circuit gate '{}' added without qubit indices; mapping it onto qubits 0..{}",
                    gate.name(),
                    required
                );
                gate.set_qubit_indices((0..required).collect())
            }
            Gate::Controlled { gate, .. } => gate.assign_default_mappings(qubit_count),
            _ => Ok(()),
        }
    }
}

impl From<CircuitGate> for Gate {
    fn from(gate: CircuitGate) -> Self {
        Gate::SubCircuit(gate)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Hadamard { target } => write!(f, "H(q{})", target),
            Gate::X { target } => write!(f, "X(q{})", target),
            Gate::Y { target } => write!(f, "Y(q{})", target),
            Gate::Z { target } => write!(f, "Z(q{})", target),
            Gate::Phase { target, theta } => write!(f, "P[{:.4}](q{})", theta, target),
            Gate::Swap { first, second } => write!(f, "Swap(q{}, q{})", first, second),
            Gate::Measure { pairs } => {
                write!(f, "Measure(")?;
                for (i, (qubit, bit)) in pairs.iter().enumerate() {
                    write!(f, "{}q{}->c{}", if i > 0 { ", " } else { "" }, qubit, bit)?;
                }
                write!(f, ")")
            }
            Gate::Controlled { control, gate } => write!(f, "C[{}] {}", control, gate),
            Gate::SubCircuit(gate) => write!(f, "{}", gate),
            Gate::Init { target, state } => write!(f, "Init(q{}, {})", target, state),
            Gate::Print { target } => write!(f, "Print(q{})", target),
        }
    }
}
