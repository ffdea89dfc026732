//! Vocabulary shared by both transducer variants.
//!
//! - State identifiers and run status
//! - Model editing errors
//! - Acceptance policies for runs that exhaust their input
//! - The step trace
//! - Run bookkeeping and the [`Simulate`] driver trait
//!
//! Nothing in this module knows whether output is attached to transitions
//! or to states; that lives in [`crate::mealy`] and [`crate::moore`].

mod acceptance;
mod error;
mod run;
mod state;
mod trace;

pub use acceptance::{AcceptancePolicy, RunContext};
pub use error::ModelError;
pub(crate) use run::Advance;
pub use run::{RunState, Simulate};
pub use state::{StateId, Status};
pub use trace::{Firing, RunTrace, StepRecord};
