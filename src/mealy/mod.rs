//! Mealy machines: output on transitions.
//!
//! A [`MealyModel`] stores `(state, symbol) → (next state, output)`; a
//! [`MealySimulator`] reads input one symbol at a time and appends the
//! output of every transition it fires.

mod model;
mod record;
mod simulator;

pub use model::{MealyModel, MealyTransition};
pub use record::{MealyEdge, MealyRecord};
pub use simulator::MealySimulator;
