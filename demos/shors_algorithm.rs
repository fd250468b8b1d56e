//! Period finding for f(x) = a^x mod 15, the quantum half of Shor's algorithm.
//!
//! Counting qubits are put in superposition and each controls a power of the
//! modular-multiplication sub-circuit. An inverse QFT is appended before the
//! counting register is measured.

use qcircuit::{Circuit, CircuitError, CircuitGate, CompoundResult, ProbabilityEngine};
use std::f64::consts::PI;
use std::rc::Rc;

/// Multiplication by `a^power` mod 15 on a 4-qubit work register.
fn u_gate(engine: &Rc<ProbabilityEngine>, a: u64, power: u64) -> Result<CircuitGate, CircuitError> {
    if ![2, 4, 7, 8, 11, 13].contains(&a) {
        return Err(CircuitError::invalid_parameter(format!("{} is not coprime to 15", a)));
    }
    let mut circuit = Circuit::with_qubits(engine.clone(), 4);
    for _ in 0..power {
        match a {
            2 | 13 => {
                circuit.add_swap_gate(2, 3)?;
                circuit.add_swap_gate(1, 2)?;
                circuit.add_swap_gate(0, 1)?;
            }
            7 | 8 => {
                circuit.add_swap_gate(0, 1)?;
                circuit.add_swap_gate(1, 2)?;
                circuit.add_swap_gate(2, 3)?;
            }
            _ => {
                circuit.add_swap_gate(1, 3)?;
                circuit.add_swap_gate(0, 2)?;
            }
        }
        if matches!(a, 7 | 11 | 13) {
            for index in 0..4 {
                circuit.add_x_gate(index)?;
            }
        }
    }
    Ok(circuit.to_gate().with_name(format!("{}^{} mod 15", a, power)))
}

/// Inverse QFT over the first `n` qubits of a register shaped
/// `qubit_count` x `bit_count`.
fn inverse_qft(
    engine: &Rc<ProbabilityEngine>,
    n: usize,
    qubit_count: usize,
    bit_count: usize,
) -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::new(engine.clone(), qubit_count, bit_count);
    for index in 0..n / 2 {
        circuit.add_swap_gate(index, n - index - 1)?;
    }
    for i in 0..n {
        for j in 0..i {
            circuit.add_controlled_phase_gate(j, i, PI / 2f64.powi((i - j) as i32))?;
        }
        circuit.add_hadamard_gate(i)?;
    }
    Ok(circuit)
}

fn shors_algorithm(
    a: u64,
    counting_qubits: usize,
    repetitions: usize,
) -> Result<CompoundResult, CircuitError> {
    let engine = Rc::new(ProbabilityEngine::new());
    let qubit_count = counting_qubits + 4;
    let mut circuit = Circuit::new(engine.clone(), qubit_count, counting_qubits);

    for i in 0..counting_qubits {
        circuit.add_hadamard_gate(i)?;
    }
    // Work register starts at |1>
    circuit.add_x_gate(counting_qubits)?;

    let work: Vec<usize> = (counting_qubits..qubit_count).collect();
    for i in 0..counting_qubits {
        let gate = u_gate(&engine, a, 1 << i)?.with_qubit_indices(work.clone())?;
        circuit.add_gate(gate.make_controlled(i, false))?;
    }

    circuit.append(&inverse_qft(&engine, counting_qubits, qubit_count, counting_qubits)?)?;

    for i in 0..counting_qubits {
        circuit.add_measure_gate([(i, i)])?;
    }

    println!("{}", circuit);
    circuit.simulate(repetitions)
}

fn main() -> Result<(), CircuitError> {
    println!("--- qcircuit Example: Shor's Algorithm (N = 15, a = 7) ---\n");

    let counting_qubits = 4;
    let result = shors_algorithm(7, counting_qubits, 1000)?;
    println!("Simulation results:\n{}\n", result);

    for (outcome, count) in result.iter() {
        let Ok(value) = u64::from_str_radix(outcome, 2) else {
            continue;
        };
        let phase = value as f64 / f64::from(1u32 << counting_qubits);
        println!("{} -> phase {:.4} ({} times)", outcome, phase, count);
    }

    match shors_algorithm(6, counting_qubits, 1) {
        Err(err) => println!("\na = 6 rejected: {}", err),
        Ok(_) => println!("\na = 6 unexpectedly accepted"),
    }

    Ok(())
}
