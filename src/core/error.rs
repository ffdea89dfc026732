//! Model editing errors.

use thiserror::Error;

/// Errors from model-level editing helpers.
///
/// Transition-table operations themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("state name '{name}' is already in use")]
    StateNameInUse { name: String },
}
