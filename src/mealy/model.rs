//! Mealy transition table.

use crate::core::{ModelError, StateId};
use crate::record::RecordErrors;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::record::MealyRecord;

/// Target and output of a Mealy transition.
///
/// The output is produced the moment the transition fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealyTransition {
    #[serde(rename = "state")]
    pub next_state: StateId,
    pub output: String,
}

/// Transition table of a Mealy machine.
///
/// Maps `(state, symbol)` to `(next state, output)`. Inserting a transition
/// for a pair that already has one replaces it, so the table is
/// deterministic by construction.
///
/// # Example
///
/// ```rust
/// use transducer_sim::mealy::MealyModel;
///
/// let mut model = MealyModel::new();
/// model.add_transition("q0", 'a', "q1", "0");
/// model.add_transition("q1", 'b', "q0", "1");
/// model.set_start_state("q0");
///
/// let t = model.do_transition("q0", 'a').unwrap();
/// assert_eq!(t.next_state, "q1");
/// assert_eq!(t.output, "0");
/// assert!(model.do_transition("q0", 'b').is_none());
/// assert!(model.has_transition("q1", "q0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealyModel {
    transitions: BTreeMap<StateId, BTreeMap<char, MealyTransition>>,
    start_state: Option<StateId>,
}

impl MealyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the transition for `(source, symbol)`.
    pub fn add_transition(
        &mut self,
        source: impl Into<StateId>,
        symbol: char,
        target: impl Into<StateId>,
        output: impl Into<String>,
    ) {
        self.transitions.entry(source.into()).or_default().insert(
            symbol,
            MealyTransition {
                next_state: target.into(),
                output: output.into(),
            },
        );
    }

    /// Remove the transition for `(source, symbol)` if it still leads to `target`.
    pub fn remove_transition(&mut self, source: &str, symbol: char, target: &str) {
        if let Some(bucket) = self.transitions.get_mut(source) {
            if bucket.get(&symbol).is_some_and(|t| t.next_state == target) {
                bucket.remove(&symbol);
            }
        }
    }

    /// Remove every transition out of and into `state`.
    ///
    /// The state keeps an empty bucket of outgoing transitions.
    pub fn remove_transitions(&mut self, state: &str) {
        self.transitions
            .insert(StateId::from(state), BTreeMap::new());
        for bucket in self.transitions.values_mut() {
            bucket.retain(|_, t| t.next_state != state);
        }
    }

    /// Check if any symbol leads from `source` to `target`.
    pub fn has_transition(&self, source: &str, target: &str) -> bool {
        self.transitions
            .get(source)
            .is_some_and(|bucket| bucket.values().any(|t| t.next_state == target))
    }

    /// Look up the transition taken from `state` on `symbol`.
    pub fn do_transition(&self, state: &str, symbol: char) -> Option<&MealyTransition> {
        self.transitions.get(state)?.get(&symbol)
    }

    pub fn start_state(&self) -> Option<&StateId> {
        self.start_state.as_ref()
    }

    pub fn set_start_state(&mut self, state: impl Into<StateId>) {
        self.start_state = Some(state.into());
    }

    pub fn clear_start_state(&mut self) {
        self.start_state = None;
    }

    /// Remove a state entirely: its transitions, its bucket and its start mark.
    pub fn remove_state(&mut self, state: &str) {
        self.remove_transitions(state);
        self.transitions.remove(state);
        if self.start_state.as_ref().is_some_and(|s| s == state) {
            self.start_state = None;
        }
    }

    /// Give `old` a new name everywhere it appears.
    ///
    /// Fails if `new` already names a state of this model.
    pub fn rename_state(&mut self, old: &str, new: &str) -> Result<(), ModelError> {
        if old == new {
            return Ok(());
        }
        if self.contains_state(new) {
            return Err(ModelError::StateNameInUse {
                name: new.to_string(),
            });
        }

        let renamed = StateId::from(new);
        if let Some(bucket) = self.transitions.remove(old) {
            self.transitions.insert(renamed.clone(), bucket);
        }
        for t in self.transitions.values_mut().flat_map(BTreeMap::values_mut) {
            if t.next_state == old {
                t.next_state = renamed.clone();
            }
        }
        if self.start_state.as_ref().is_some_and(|s| s == old) {
            self.start_state = Some(renamed);
        }
        Ok(())
    }

    /// Symbols on which `source` leads to `target`, in order.
    pub fn symbols_between(&self, source: &str, target: &str) -> Vec<char> {
        self.transitions
            .get(source)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|(_, t)| t.next_state == target)
                    .map(|(symbol, _)| *symbol)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every state mentioned by the model, sorted.
    pub fn states(&self) -> Vec<StateId> {
        let mut states: BTreeSet<&StateId> = BTreeSet::new();
        for (source, bucket) in &self.transitions {
            states.insert(source);
            states.extend(bucket.values().map(|t| &t.next_state));
        }
        states.extend(self.start_state.iter());
        states.into_iter().cloned().collect()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.transitions.contains_key(state)
            || self.start_state.as_ref().is_some_and(|s| s == state)
            || self
                .transitions
                .values()
                .any(|bucket| bucket.values().any(|t| t.next_state == state))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// All transitions as `(source, symbol, transition)`, ordered by source then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, char, &MealyTransition)> {
        self.transitions
            .iter()
            .flat_map(|(source, bucket)| bucket.iter().map(move |(symbol, t)| (source, *symbol, t)))
    }

    /// Source buckets, including empty ones left behind by `remove_transitions`.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = (&StateId, &BTreeMap<char, MealyTransition>)> {
        self.transitions.iter()
    }

    pub(crate) fn from_parts(
        transitions: BTreeMap<StateId, BTreeMap<char, MealyTransition>>,
        start_state: Option<StateId>,
    ) -> Self {
        Self {
            transitions,
            start_state,
        }
    }

    /// Snapshot the whole model as a plain record.
    pub fn serialize(&self) -> MealyRecord {
        MealyRecord::from(self)
    }

    /// Replace the whole model with the contents of `record`.
    ///
    /// The record is validated first; on error the model is left untouched.
    pub fn deserialize(&mut self, record: MealyRecord) -> Result<(), RecordErrors> {
        *self = MealyModel::try_from(record)?;
        Ok(())
    }
}
