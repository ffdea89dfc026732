//! Builder API for ergonomic model construction.
//!
//! This module provides fluent builders and macros for creating Mealy and
//! Moore models with minimal boilerplate. Unlike the raw model API, the
//! builders insist on a start state and at least one transition.

pub mod error;
pub mod macros;
pub mod mealy;
pub mod moore;

pub use error::BuildError;
pub use mealy::MealyBuilder;
pub use moore::MooreBuilder;
