//! Record validation errors.

use thiserror::Error;

/// A single structural problem found in a machine record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Transition keys must be exactly one character.
    #[error("transition from '{state}' is keyed by '{symbol}', expected a single character")]
    InvalidSymbol { state: String, symbol: String },

    /// State names may not be empty.
    #[error("empty state name used as {location}")]
    EmptyStateName { location: String },
}

/// Every problem found while validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid machine record: {}", join(.0))]
pub struct RecordErrors(pub Vec<RecordError>);

impl RecordErrors {
    pub fn errors(&self) -> &[RecordError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join(errors: &[RecordError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
