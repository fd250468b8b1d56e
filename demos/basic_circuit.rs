//! Basic usage: a qubit, a classical bit, and a Bell-pair circuit simulated
//! many times.

use qcircuit::{Circuit, CircuitError, ClassicBit, ProbabilityEngine, Qubit};
use std::rc::Rc;

fn main() -> Result<(), CircuitError> {
    println!("--- qcircuit Example: Bell Pair ---");

    // One engine supplies every random draw of the circuit.
    let engine = Rc::new(ProbabilityEngine::new());

    let qubit = Qubit::new(engine.clone());
    println!("Qubit:\n{}\n", qubit);

    let bit = ClassicBit::One;
    println!("Classic bit:\n{}\n", bit);

    // 2 qubits, 2 classical bits
    let mut circuit = Circuit::new(engine, 2, 2);

    // Superposition on q0, then correlate q1 with it
    circuit.add_hadamard_gate(0)?;
    circuit.add_cx_gate(0, 1)?;
    circuit.add_measure_gate([(0, 0), (1, 1)])?;

    println!("Circuit:\n{}", circuit);

    let result = circuit.simulate(10_000)?;
    println!("Simulation results:\n{}", result);

    if let Some((outcome, count)) = result.most_frequent() {
        println!("Most frequent outcome: {} ({} times)", outcome, count);
    }

    Ok(())
}
