//! Quantum teleportation, built step by step with the diagram printed after
//! each stage.
//!
//! q0 holds a random state, q1/q2 form the shared pair. After measuring
//! q0 and q1, classically controlled corrections leave q2 in the original
//! state of q0.

use qcircuit::{Circuit, CircuitError, Gate, ProbabilityEngine, QubitState};
use std::rc::Rc;

fn main() -> Result<(), CircuitError> {
    println!("--- qcircuit Example: Quantum Teleportation ---\n");

    let engine = Rc::new(ProbabilityEngine::new());
    let mut circuit = Circuit::new(engine.clone(), 3, 2);

    // 1. Prepare the message qubit
    let message = QubitState::random(&engine)?;
    println!("Step 1: initialize q0 to a random state {}\n", message);
    circuit.add_init_gate(0, message)?;
    println!("{}\n", circuit);

    // 2. Shared pair between q1 and q2
    println!("Step 2: create the shared pair on q1 and q2\n");
    circuit.add_hadamard_gate(1)?;
    circuit.add_cx_gate(1, 2)?;
    println!("{}\n", circuit);

    // 3. Basis change on the message side
    println!("Step 3: entangle q0 with q1\n");
    circuit.add_cx_gate(0, 1)?;
    circuit.add_hadamard_gate(0)?;
    println!("{}\n", circuit);

    // 4. Measure
    println!("Step 4: measure q0 and q1\n");
    circuit.add_measure_gate([(0, 0), (1, 1)])?;
    println!("{}\n", circuit);

    // 5. Corrections conditioned on the measured bits
    println!("Step 5: apply corrections from the classical bits\n");
    circuit.add_gate(Gate::x(2).make_controlled(1, true))?;
    circuit.add_gate(Gate::z(2).make_controlled(0, true))?;
    println!("{}\n", circuit);

    let outcome = circuit.run()?;
    println!("Measured bits: {}", outcome);
    println!("Final state of q2: {}", circuit.qubit(2)?);

    Ok(())
}
