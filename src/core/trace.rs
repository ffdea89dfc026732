//! Step-by-step trace of a simulation run.
//!
//! Every executed step leaves a [`StepRecord`] behind: which symbol was
//! read, which transitions fired, and what output they produced. Front ends
//! use it to highlight the transitions taken by the last step; tests use it
//! to check the path of a run.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single transition taken during a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firing {
    pub from: StateId,
    pub to: StateId,
}

/// Record of one executed step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Cursor position of the symbol that was read.
    pub index: usize,
    /// The symbol that was read.
    pub symbol: char,
    /// Transitions that fired, in active-state order.
    pub fired: Vec<Firing>,
    /// Active states after the step.
    pub states: Vec<StateId>,
    /// Output appended by this step.
    pub emitted: String,
    /// When the step ran.
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of the steps of a run.
///
/// # Example
///
/// ```rust
/// use transducer_sim::core::Simulate;
/// use transducer_sim::mealy::{MealyModel, MealySimulator};
///
/// let mut model = MealyModel::new();
/// model.add_transition("q0", 'a', "q1", "0");
/// model.set_start_state("q0");
///
/// let mut sim = MealySimulator::new(&model);
/// sim.initialize("a");
/// sim.step();
///
/// let step = &sim.trace().steps()[0];
/// assert_eq!(step.symbol, 'a');
/// assert_eq!(step.emitted, "0");
/// assert_eq!(step.fired[0].to, "q1");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunTrace {
    initial: Vec<StateId>,
    steps: Vec<StepRecord>,
}

impl RunTrace {
    /// Start a trace at the given active states.
    pub fn starting_at(initial: Vec<StateId>) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Active-state sets traversed, starting with the initial set.
    pub fn path(&self) -> Vec<&[StateId]> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.initial.as_slice());
        for step in &self.steps {
            path.push(step.states.as_slice());
        }
        path
    }

    /// Time between the first and the last recorded step.
    ///
    /// Returns `None` if no step has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}
