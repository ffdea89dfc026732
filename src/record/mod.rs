//! Validation of plain machine records.
//!
//! Records arrive from outside (a file, an editor, a checkpoint) as nested
//! string maps. Before one replaces a model it is checked with Stillwater's
//! `Validation`, so a caller sees every problem in the record at once rather
//! than only the first.
//!
//! The record shapes themselves live next to their models:
//! [`crate::mealy::MealyRecord`] and [`crate::moore::MooreRecord`].

pub mod error;

pub use error::{RecordError, RecordErrors};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of one record check.
pub(crate) type Check = Validation<(), NonEmptyVec<RecordError>>;

/// The character of a one-character transition key.
pub(crate) fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub(crate) fn check_symbol(state: &str, key: &str) -> Check {
    match single_char(key) {
        Some(_) => Validation::success(()),
        None => Validation::fail(RecordError::InvalidSymbol {
            state: state.to_string(),
            symbol: key.to_string(),
        }),
    }
}

pub(crate) fn check_state(name: &str, location: impl FnOnce() -> String) -> Check {
    if name.is_empty() {
        Validation::fail(RecordError::EmptyStateName {
            location: location(),
        })
    } else {
        Validation::success(())
    }
}

/// Combine all checks, keeping every failure.
pub(crate) fn collect(checks: Vec<Check>) -> Result<(), RecordErrors> {
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let errors = RecordErrors(errors.iter().cloned().collect());
            tracing::warn!(count = errors.len(), "rejected machine record: {}", errors);
            Err(errors)
        }
    }
}
