//! Build errors for the model builders.

use thiserror::Error;

/// Errors that can occur when building a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}
