//! Run bookkeeping shared by the Mealy and Moore simulators.
//!
//! The two simulators differ only in where output comes from. Everything
//! else about a run (cursor, active set, status changes, trace) lives here.

use super::acceptance::{AcceptancePolicy, RunContext};
use super::state::{StateId, Status};
use super::trace::{Firing, RunTrace, StepRecord};
use chrono::Utc;

/// Mutable state of one simulation run.
#[derive(Debug, Clone)]
pub struct RunState {
    status: Status,
    input: Vec<char>,
    index: usize,
    states: Vec<StateId>,
    output: String,
    trace: RunTrace,
}

/// Outcome of reading one symbol, computed by a simulator.
#[derive(Debug, Default)]
pub(crate) struct Advance {
    pub states: Vec<StateId>,
    pub fired: Vec<Firing>,
    pub emitted: String,
}

impl Advance {
    /// Add `target` to the next active set unless it is already there.
    pub fn enter(&mut self, target: &StateId) {
        if !self.states.contains(target) {
            self.states.push(target.clone());
        }
    }
}

impl RunState {
    /// Fresh run over `input`, seeded with the start state if there is one.
    pub(crate) fn new(start: Option<&StateId>, input: &str) -> Self {
        let states: Vec<StateId> = start.cloned().into_iter().collect();
        Self {
            status: Status::Running,
            input: input.chars().collect(),
            index: 0,
            trace: RunTrace::starting_at(states.clone()),
            states,
            output: String::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Symbols already read.
    pub fn consumed(&self) -> String {
        self.input[..self.index].iter().collect()
    }

    /// Symbol under the cursor, if any input remains.
    pub fn current_symbol(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }

    /// Symbols after the one under the cursor.
    pub fn remaining(&self) -> String {
        self.input
            .get(self.index + 1..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default()
    }

    /// Apply the outcome of reading `symbol` and update the status.
    pub(crate) fn advance(&mut self, symbol: char, step: Advance, policy: &AcceptancePolicy) {
        tracing::trace!(
            index = self.index,
            symbol = %symbol,
            fired = step.fired.len(),
            emitted = %step.emitted,
            "step"
        );

        self.trace.record(StepRecord {
            index: self.index,
            symbol,
            fired: step.fired,
            states: step.states.clone(),
            emitted: step.emitted.clone(),
            timestamp: Utc::now(),
        });

        self.index += 1;
        self.states = step.states;
        self.output.push_str(&step.emitted);

        if self.states.is_empty() {
            self.finish(Status::Reject);
        } else if self.index == self.input.len() {
            self.settle(policy);
        }
    }

    /// Decide the final status through `policy`.
    ///
    /// Touches neither cursor, states nor output.
    pub(crate) fn settle(&mut self, policy: &AcceptancePolicy) {
        let context = RunContext {
            states: &self.states,
            index: self.index,
            input_len: self.input.len(),
            output: &self.output,
        };
        let status = if policy.check(&context) {
            Status::Accept
        } else {
            Status::Reject
        };
        self.finish(status);
    }

    fn finish(&mut self, status: Status) {
        tracing::debug!(
            status = %status,
            index = self.index,
            states = self.states.len(),
            "run finished"
        );
        self.status = status;
    }
}

/// Driver interface common to both simulators.
///
/// Implementors supply `initialize`, `step` and access to their
/// [`RunState`]; inspection and run-to-completion come for free.
pub trait Simulate {
    /// Reset the run to the start of `input`.
    fn initialize(&mut self, input: &str);

    /// Read one symbol, or settle the status once the input is exhausted.
    ///
    /// No-op once the status is final.
    fn step(&mut self);

    fn run_state(&self) -> &RunState;

    fn status(&self) -> Status {
        self.run_state().status()
    }

    fn input(&self) -> String {
        self.run_state().input()
    }

    fn index(&self) -> usize {
        self.run_state().index()
    }

    fn states(&self) -> &[StateId] {
        self.run_state().states()
    }

    fn output(&self) -> &str {
        self.run_state().output()
    }

    fn trace(&self) -> &RunTrace {
        self.run_state().trace()
    }

    fn consumed(&self) -> String {
        self.run_state().consumed()
    }

    fn current_symbol(&self) -> Option<char> {
        self.run_state().current_symbol()
    }

    fn remaining(&self) -> String {
        self.run_state().remaining()
    }

    /// Run `input` to completion and return the final status.
    ///
    /// Terminates: every step either moves the cursor or finalizes the status.
    fn run(&mut self, input: &str) -> Status {
        self.initialize(input);
        while self.status().is_running() {
            self.step();
        }
        self.status()
    }

    /// Run `input` to completion and report whether it was accepted.
    fn accepts(&mut self, input: &str) -> bool {
        self.run(input) == Status::Accept
    }
}
