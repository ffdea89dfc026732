//! Moore machines: output on states.
//!
//! A [`MooreModel`] stores `(state, symbol) → next state` plus a table of
//! per-state outputs; a [`MooreSimulator`] appends the output of each state
//! it enters.

mod model;
mod record;
mod simulator;

pub use model::MooreModel;
pub use record::MooreRecord;
pub use simulator::MooreSimulator;
