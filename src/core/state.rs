//! State identifiers and run status.
//!
//! States carry no data of their own. They are plain names that appear as
//! keys and values in transition tables, so `StateId` is a thin wrapper over
//! a `String` that serializes as the bare string.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier of an automaton state.
///
/// `StateId` borrows as `str`, so tables keyed by `StateId` can be queried
/// with a plain `&str`.
///
/// # Example
///
/// ```rust
/// use transducer_sim::core::StateId;
///
/// let q0 = StateId::new("q0");
/// assert_eq!(q0.as_str(), "q0");
/// assert_eq!(q0, StateId::from("q0"));
/// assert_eq!(q0.to_string(), "q0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&StateId> for StateId {
    fn from(s: &StateId) -> Self {
        s.clone()
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a simulation run.
///
/// `Accept` and `Reject` are terminal: a simulator in either status ignores
/// further `step` calls until it is re-initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Running,
    Accept,
    Reject,
}

impl Status {
    /// Name used for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if this is a terminal status.
    pub fn is_final(&self) -> bool {
        !self.is_running()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
