//! Acceptance policies for finished runs.
//!
//! A run that consumes its whole input without dying still has to end in
//! either `Accept` or `Reject`. The policy is a pure predicate over the
//! final run state that makes that call.

use super::state::StateId;
use std::fmt;
use std::sync::Arc;

/// Snapshot of a run handed to an [`AcceptancePolicy`].
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// Active states after the last step.
    pub states: &'a [StateId],
    /// Cursor position. Equals `input_len` when the policy is consulted.
    pub index: usize,
    /// Number of symbols in the input.
    pub input_len: usize,
    /// Output accumulated so far.
    pub output: &'a str,
}

impl RunContext<'_> {
    pub fn input_exhausted(&self) -> bool {
        self.index >= self.input_len
    }
}

/// Pure predicate that decides acceptance once the input is exhausted.
///
/// The default policy accepts whenever at least one state is still active.
///
/// # Example
///
/// ```rust
/// use transducer_sim::core::{AcceptancePolicy, RunContext, StateId};
///
/// let ends_in_one = AcceptancePolicy::new(|run: &RunContext<'_>| run.output.ends_with('1'));
///
/// let states = [StateId::new("q0")];
/// let run = RunContext { states: &states, index: 2, input_len: 2, output: "01" };
/// assert!(ends_in_one.check(&run));
/// assert!(AcceptancePolicy::default().check(&run));
/// ```
#[derive(Clone)]
pub struct AcceptancePolicy {
    predicate: Arc<dyn Fn(&RunContext<'_>) -> bool + Send + Sync>,
}

impl AcceptancePolicy {
    /// Create a policy from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&RunContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Accept when at least one state is active.
    pub fn non_empty() -> Self {
        Self::new(|run| !run.states.is_empty())
    }

    /// Accept when any active state is one of `states`.
    ///
    /// This is the classic "final states" rule of acceptors.
    pub fn any_of<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        let accepting: Vec<StateId> = states.into_iter().map(Into::into).collect();
        Self::new(move |run| run.states.iter().any(|s| accepting.contains(s)))
    }

    pub fn check(&self, run: &RunContext<'_>) -> bool {
        (self.predicate)(run)
    }
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::non_empty()
    }
}

impl fmt::Debug for AcceptancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptancePolicy").finish_non_exhaustive()
    }
}
