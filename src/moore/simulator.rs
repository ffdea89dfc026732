//! Step-by-step Moore simulation.

use crate::core::{AcceptancePolicy, Advance, Firing, RunState, Simulate};

use super::model::MooreModel;

/// Drives input through a [`MooreModel`], appending the output of every
/// state entered.
///
/// The start state's own output is not emitted; output only appears once a
/// step has moved into a state.
///
/// # Example
///
/// ```rust
/// use transducer_sim::core::Simulate;
/// use transducer_sim::moore::{MooreModel, MooreSimulator};
///
/// let mut model = MooreModel::new();
/// model.add_transition("q0", 'a', "q1");
/// model.add_transition("q1", 'b', "q0");
/// model.set_state_output("q0", "x");
/// model.set_state_output("q1", "y");
/// model.set_start_state("q0");
///
/// let mut sim = MooreSimulator::new(&model);
/// sim.initialize("ab");
/// sim.step();
/// assert_eq!(sim.output(), "y");
/// sim.step();
/// assert_eq!(sim.output(), "yx");
/// ```
#[derive(Debug, Clone)]
pub struct MooreSimulator<'m> {
    model: &'m MooreModel,
    policy: AcceptancePolicy,
    run: RunState,
}

impl<'m> MooreSimulator<'m> {
    /// Create a simulator with the default acceptance policy.
    ///
    /// The simulator starts out as if initialized with empty input.
    pub fn new(model: &'m MooreModel) -> Self {
        Self::with_policy(model, AcceptancePolicy::default())
    }

    pub fn with_policy(model: &'m MooreModel, policy: AcceptancePolicy) -> Self {
        Self {
            model,
            policy,
            run: RunState::new(model.start_state(), ""),
        }
    }

    pub fn model(&self) -> &'m MooreModel {
        self.model
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }
}

impl Simulate for MooreSimulator<'_> {
    fn initialize(&mut self, input: &str) {
        tracing::debug!(input, start = ?self.model.start_state(), "initializing moore run");
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
            if let Some(target) = self.model.do_transition(state.as_str(), symbol) {
                next.enter(target);
                next.fired.push(Firing {
                    from: state.clone(),
                    to: target.clone(),
                });
            }
        }
        for state in &next.states {
            next.emitted.push_str(self.model.state_output(state.as_str()));
        }
        self.run.advance(symbol, next, &self.policy);
    }

    fn run_state(&self) -> &RunState {
        &self.run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateId, Status};

    fn sample() -> MooreModel {
        let mut model = MooreModel::new();
        model.add_transition("q0", 'a', "q1");
        model.add_transition("q1", 'b', "q0");
        model.set_state_output("q0", "x");
        model.set_state_output("q1", "y");
        model.set_start_state("q0");
        model
    }

    #[test]
    fn initialize_does_not_emit_start_output() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);
        sim.initialize("ab");

        assert_eq!(sim.output(), "");
        assert_eq!(sim.states(), &[StateId::new("q0")]);
        assert_eq!(sim.status(), Status::Running);
    }

    #[test]
    fn steps_emit_output_of_entered_states() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);
        sim.initialize("ab");

        sim.step();
        assert_eq!(sim.output(), "y");
        assert_eq!(sim.states(), &[StateId::new("q1")]);

        sim.step();
        assert_eq!(sim.output(), "yx");
        assert_eq!(sim.states(), &[StateId::new("q0")]);
        assert_eq!(sim.status(), Status::Accept);
    }

    #[test]
    fn dead_end_rejects() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);

        assert_eq!(sim.run("aa"), Status::Reject);
        assert!(sim.states().is_empty());
        assert_eq!(sim.output(), "y");
        assert_eq!(sim.index(), 2);
    }

    #[test]
    fn step_after_reject_changes_nothing() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);
        sim.initialize("zab");
        sim.step();
        assert_eq!(sim.status(), Status::Reject);

        sim.step();

        assert_eq!(sim.index(), 1);
        assert_eq!(sim.output(), "");
        assert!(sim.states().is_empty());
    }

    #[test]
    fn states_without_output_emit_nothing() {
        let mut model = sample();
        model.add_transition("q1", 'c', "silent");
        let mut sim = MooreSimulator::new(&model);

        assert!(sim.accepts("ac"));
        assert_eq!(sim.output(), "y");
    }

    #[test]
    fn self_loop_emits_on_every_entry() {
        let mut model = MooreModel::new();
        model.add_transition("s", '1', "s");
        model.set_state_output("s", "!");
        model.set_start_state("s");
        let mut sim = MooreSimulator::new(&model);

        assert!(sim.accepts("111"));
        assert_eq!(sim.output(), "!!!");
        assert_eq!(sim.trace().steps().len(), 3);
    }

    #[test]
    fn policy_decides_at_end_of_input() {
        let model = sample();
        let policy = AcceptancePolicy::new(|run| run.output.ends_with('y'));
        let mut sim = MooreSimulator::with_policy(&model, policy);

        assert!(sim.accepts("a"));
        assert!(!sim.accepts("ab"));
    }

    #[test]
    fn empty_input_accepts_with_start_state() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);

        assert!(sim.accepts(""));
        assert_eq!(sim.output(), "");
    }

    #[test]
    fn trace_records_emitted_output() {
        let model = sample();
        let mut sim = MooreSimulator::new(&model);
        sim.run("ab");

        let emitted: Vec<&str> = sim
            .trace()
            .steps()
            .iter()
            .map(|s| s.emitted.as_str())
            .collect();
        assert_eq!(emitted, vec!["y", "x"]);
    }
}
