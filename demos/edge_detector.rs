//! Rising Edge Detector (Moore)
//!
//! This example flags every 0 -> 1 change in a bit stream.
//!
//! Key concepts:
//! - Output attached to states
//! - Writing a model with the `moore!` macro
//! - Reading the step trace after a run
//! - Custom acceptance policies
//!
//! Run with: cargo run --example edge_detector

use transducer_sim::moore;
use transducer_sim::{AcceptancePolicy, MooreSimulator, Simulate};

fn main() {
    println!("=== Rising Edge Detector ===\n");

    let model = moore! {
        start: "low";
        outputs { "low" => "0", "rise" => "1", "high" => "0" }
        transitions {
            "low", '0' => "low";
            "low", '1' => "rise";
            "rise", '0' => "low";
            "rise", '1' => "high";
            "high", '0' => "low";
            "high", '1' => "high";
        }
    };

    let input = "0110111";
    let mut sim = MooreSimulator::new(&model);
    let status = sim.run(input);

    println!("Input:  {}", input);
    println!("Output: {}", sim.output());
    println!("Status: {}\n", status);

    println!("Trace:");
    for step in sim.trace().steps() {
        let fired: Vec<String> = step
            .fired
            .iter()
            .map(|f| format!("{} -> {}", f.from, f.to))
            .collect();
        println!(
            "  #{} '{}' {} emits {:?}",
            step.index,
            step.symbol,
            fired.join(", "),
            step.emitted
        );
    }

    // Only accept streams that end right after a rising edge
    let policy = AcceptancePolicy::any_of(["rise"]);
    let mut strict = MooreSimulator::with_policy(&model, policy);

    println!("\nEnds on a rising edge?");
    for input in ["01", "011", "0101", "2"] {
        println!("  {:<5} -> {}", input, strict.run(input));
    }

    println!("\n=== Example Complete ===");
}
