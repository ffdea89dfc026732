//! Step-by-step Mealy simulation.

use crate::core::{AcceptancePolicy, Advance, Firing, RunState, Simulate};

use super::model::MealyModel;

/// Drives input through a [`MealyModel`], appending each fired transition's
/// output as it goes.
///
/// The simulator borrows its model, so several simulators can share one
/// model and none of them can observe it changing mid-run.
///
/// # Example
///
/// ```rust
/// use transducer_sim::core::{Simulate, Status};
/// use transducer_sim::mealy::{MealyModel, MealySimulator};
///
/// let mut model = MealyModel::new();
/// model.add_transition("q0", 'a', "q1", "0");
/// model.add_transition("q1", 'b', "q0", "1");
/// model.set_start_state("q0");
///
/// let mut sim = MealySimulator::new(&model);
/// assert_eq!(sim.run("ab"), Status::Accept);
/// assert_eq!(sim.output(), "01");
/// assert_eq!(sim.states()[0], "q0");
///
/// assert!(!sim.accepts("ac"));
/// assert!(sim.states().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MealySimulator<'m> {
    model: &'m MealyModel,
    policy: AcceptancePolicy,
    run: RunState,
}

impl<'m> MealySimulator<'m> {
    /// Create a simulator with the default acceptance policy.
    ///
    /// The simulator starts out as if initialized with empty input.
    pub fn new(model: &'m MealyModel) -> Self {
        Self::with_policy(model, AcceptancePolicy::default())
    }

    pub fn with_policy(model: &'m MealyModel, policy: AcceptancePolicy) -> Self {
        Self {
            model,
            policy,
            run: RunState::new(model.start_state(), ""),
        }
    }

    pub fn model(&self) -> &'m MealyModel {
        self.model
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }
}

impl Simulate for MealySimulator<'_> {
    fn initialize(&mut self, input: &str) {
        tracing::debug!(input, start = ?self.model.start_state(), "initializing mealy run");
        self.run = RunState::new(self.model.start_state(), input);
    }

    fn step(&mut self) {
        if !self.run.status().is_running() {
            return;
        }
        let Some(symbol) = self.run.current_symbol() else {
            self.run.settle(&self.policy);
            return;
        };

        let mut next = Advance::default();
        for state in self.run.states() {
            if let Some(t) = self.model.do_transition(state.as_str(), symbol) {
                next.enter(&t.next_state);
                next.emitted.push_str(&t.output);
                next.fired.push(Firing {
                    from: state.clone(),
                    to: t.next_state.clone(),
                });
            }
        }
        self.run.advance(symbol, next, &self.policy);
    }

    fn run_state(&self) -> &RunState {
        &self.run
    }
}
