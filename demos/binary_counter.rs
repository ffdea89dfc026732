//! Binary Incrementer (Mealy)
//!
//! This example adds one to a binary number read least significant bit first.
//!
//! Key concepts:
//! - Output attached to transitions
//! - Building a model with the fluent builder
//! - Stepping a run and watching the tape
//! - Saving the model as a checkpoint
//!
//! Run with: cargo run --example binary_counter

use transducer_sim::checkpoint::Checkpoint;
use transducer_sim::mealy::MealyRecord;
use transducer_sim::{MealyBuilder, MealySimulator, Simulate};

fn main() {
    println!("=== Binary Incrementer ===\n");

    // "carry" still owes a one; "done" copies the rest of the number
    let model = MealyBuilder::new()
        .start("carry")
        .transition("carry", '1', "carry", "0")
        .transition("carry", '0', "done", "1")
        .transition("done", '0', "done", "0")
        .transition("done", '1', "done", "1")
        .build()
        .unwrap();

    println!("States: {:?}", model.states());
    println!("Transitions: {}\n", model.transition_count());

    // 1100 is three, read from the low bit
    let mut sim = MealySimulator::new(&model);
    sim.initialize("1100");

    println!("Stepping through 1100 (LSB first):");
    while sim.status().is_running() {
        sim.step();
        println!(
            "  read [{}] left [{}] -> output {:<4} states {:?} ({})",
            sim.consumed(),
            sim.remaining(),
            sim.output(),
            sim.states(),
            sim.status()
        );
    }

    println!("\nWhole runs:");
    for input in ["0", "1", "111", "1010"] {
        let status = sim.run(input);
        println!("  {:<5} -> {:<5} ({})", input, sim.output(), status);
    }

    // An all-ones number overflows: the carry is never paid
    println!("\nNote: 111 ends in 'carry', the caller decides what that means.");

    println!("\nCheckpoint:");
    let json = Checkpoint::new(model.serialize()).to_json().unwrap();
    println!("{}", json);

    let restored = Checkpoint::<MealyRecord>::from_json(&json)
        .unwrap()
        .restore()
        .unwrap();
    println!("\nRestored model equal to original: {}", restored == model);

    println!("\n=== Example Complete ===");
}
