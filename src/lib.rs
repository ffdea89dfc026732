//! Transducer Sim: Mealy and Moore machines you can edit and step through
//!
//! A transducer reads an input string one symbol at a time and writes an
//! output string as it goes. The crate keeps the model (what the machine is)
//! apart from the simulator (how far a given run has got), so a model can be
//! edited, saved and restored independently of any run over it.
//!
//! # Core Concepts
//!
//! - **Models**: [`MealyModel`] puts output on transitions, [`MooreModel`] on states
//! - **Simulators**: [`MealySimulator`] and [`MooreSimulator`] advance one symbol per step
//! - **Acceptance**: an [`AcceptancePolicy`] decides the verdict once input runs out
//! - **Records**: plain serde snapshots of a model, validated on the way back in
//! - **Checkpoints**: versioned JSON or bincode wrappers around a record
//!
//! # Example
//!
//! ```rust
//! use transducer_sim::{MealyModel, MealySimulator, Simulate, Status};
//!
//! let mut model = MealyModel::new();
//! model.add_transition("q0", 'a', "q1", "0");
//! model.add_transition("q1", 'b', "q0", "1");
//! model.set_start_state("q0");
//!
//! let mut sim = MealySimulator::new(&model);
//! sim.initialize("ab");
//!
//! sim.step();
//! assert_eq!(sim.output(), "0");
//! assert_eq!(sim.status(), Status::Running);
//!
//! sim.step();
//! assert_eq!(sim.output(), "01");
//! assert_eq!(sim.status(), Status::Accept);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod mealy;
pub mod moore;
pub mod record;

// Re-export commonly used types
pub use builder::{BuildError, MealyBuilder, MooreBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{AcceptancePolicy, ModelError, Simulate, StateId, Status};
pub use mealy::{MealyModel, MealySimulator};
pub use moore::{MooreModel, MooreSimulator};
