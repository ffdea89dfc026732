//! Moore transition and state-output tables.

use crate::core::{ModelError, StateId};
use crate::record::RecordErrors;
use std::collections::{BTreeMap, BTreeSet};

use super::record::MooreRecord;

/// Transition and output tables of a Moore machine.
///
/// Transitions map `(state, symbol)` to the next state only; output belongs
/// to states and is kept in a separate table. A state without an entry
/// outputs the empty string.
///
/// # Example
///
/// ```rust
/// use transducer_sim::moore::MooreModel;
///
/// let mut model = MooreModel::new();
/// model.add_transition("q0", 'a', "q1");
/// model.set_state_output("q1", "y");
///
/// assert_eq!(model.do_transition("q0", 'a').unwrap(), "q1");
/// assert_eq!(model.state_output("q1"), "y");
/// assert_eq!(model.state_output("q0"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MooreModel {
    transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
    start_state: Option<StateId>,
    state_outputs: BTreeMap<StateId, String>,
}

impl MooreModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the transition for `(source, symbol)`.
    pub fn add_transition(
        &mut self,
        source: impl Into<StateId>,
        symbol: char,
        target: impl Into<StateId>,
    ) {
        self.transitions
            .entry(source.into())
            .or_default()
            .insert(symbol, target.into());
    }

    /// Remove the transition for `(source, symbol)` if it still leads to `target`.
    pub fn remove_transition(&mut self, source: &str, symbol: char, target: &str) {
        if let Some(bucket) = self.transitions.get_mut(source) {
            if bucket.get(&symbol).is_some_and(|next| next == target) {
                bucket.remove(&symbol);
            }
        }
    }

    /// Remove every transition out of and into `state`.
    ///
    /// The state keeps an empty bucket and its output entry.
    pub fn remove_transitions(&mut self, state: &str) {
        self.transitions
            .insert(StateId::from(state), BTreeMap::new());
        for bucket in self.transitions.values_mut() {
            bucket.retain(|_, next| next != state);
        }
    }

    /// Check if any symbol leads from `source` to `target`.
    pub fn has_transition(&self, source: &str, target: &str) -> bool {
        self.transitions
            .get(source)
            .is_some_and(|bucket| bucket.values().any(|next| next == target))
    }

    /// Look up the state reached from `state` on `symbol`.
    pub fn do_transition(&self, state: &str, symbol: char) -> Option<&StateId> {
        self.transitions.get(state)?.get(&symbol)
    }

    pub fn set_state_output(&mut self, state: impl Into<StateId>, output: impl Into<String>) {
        self.state_outputs.insert(state.into(), output.into());
    }

    /// Output of `state`, or `""` if none was set.
    pub fn state_output(&self, state: &str) -> &str {
        self.state_outputs.get(state).map_or("", String::as_str)
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

    /// Remove a state entirely: transitions, bucket, start mark and output.
    pub fn remove_state(&mut self, state: &str) {
        self.remove_transitions(state);
        self.transitions.remove(state);
        self.state_outputs.remove(state);
        if self.start_state.as_ref().is_some_and(|s| s == state) {
            self.start_state = None;
        }
    }

    /// Give `old` a new name everywhere it appears, output included.
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
        for next in self.transitions.values_mut().flat_map(BTreeMap::values_mut) {
            if next == old {
                *next = renamed.clone();
            }
        }
        if let Some(output) = self.state_outputs.remove(old) {
            self.state_outputs.insert(renamed.clone(), output);
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
                    .filter(|(_, next)| *next == target)
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
            states.extend(bucket.values());
        }
        states.extend(self.state_outputs.keys());
        states.extend(self.start_state.iter());
        states.into_iter().cloned().collect()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.transitions.contains_key(state)
            || self.state_outputs.contains_key(state)
            || self.start_state.as_ref().is_some_and(|s| s == state)
            || self
                .transitions
                .values()
                .any(|bucket| bucket.values().any(|next| next == state))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// All transitions as `(source, symbol, target)`, ordered by source then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, char, &StateId)> {
        self.transitions
            .iter()
            .flat_map(|(source, bucket)| bucket.iter().map(move |(symbol, next)| (source, *symbol, next)))
    }

    pub(crate) fn buckets(&self) -> impl Iterator<Item = (&StateId, &BTreeMap<char, StateId>)> {
        self.transitions.iter()
    }

    pub(crate) fn state_outputs(&self) -> &BTreeMap<StateId, String> {
        &self.state_outputs
    }

    pub(crate) fn from_parts(
        transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
        start_state: Option<StateId>,
        state_outputs: BTreeMap<StateId, String>,
    ) -> Self {
        Self {
            transitions,
            start_state,
            state_outputs,
        }
    }

    /// Snapshot the whole model as a plain record.
    pub fn serialize(&self) -> MooreRecord {
        MooreRecord::from(self)
    }

    /// Replace the whole model with the contents of `record`.
    ///
    /// The record is validated first; on error the model is left untouched.
    pub fn deserialize(&mut self, record: MooreRecord) -> Result<(), RecordErrors> {
        *self = MooreModel::try_from(record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn add_transition_overwrites_same_symbol() {
        let mut model = MooreModel::new();
        model.add_transition("a", 'x', "b1");
        model.add_transition("a", 'x', "b2");

        assert_eq!(model.do_transition("a", 'x').unwrap(), "b2");
        assert_eq!(model.transition_count(), 1);
    }

    #[test]
    fn state_output_defaults_to_empty() {
        let model = sample();
        assert_eq!(model.state_output("q1"), "y");
        assert_eq!(model.state_output("unknown"), "");
    }

    #[test]
    fn set_state_output_overwrites() {
        let mut model = sample();
        model.set_state_output("q0", "z");
        assert_eq!(model.state_output("q0"), "z");
    }

    #[test]
    fn remove_transition_requires_matching_target() {
        let mut model = sample();

        model.remove_transition("q0", 'a', "q0");
        assert!(model.has_transition("q0", "q1"));

        model.remove_transition("q0", 'a', "q1");
        assert!(!model.has_transition("q0", "q1"));
        assert!(model.do_transition("q0", 'a').is_none());
    }

    #[test]
    fn remove_transitions_clears_both_directions() {
        let mut model = sample();
        model.add_transition("q2", 'c', "q0");
        model.add_transition("q0", 'c', "q2");

        model.remove_transitions("q0");

        assert!(!model.has_transition("q0", "q1"));
        assert!(!model.has_transition("q0", "q2"));
        assert!(!model.has_transition("q1", "q0"));
        assert!(!model.has_transition("q2", "q0"));
        assert_eq!(model.transition_count(), 0);
        assert_eq!(model.state_output("q0"), "x");
    }

    #[test]
    fn has_transition_without_bucket_is_false() {
        assert!(!MooreModel::new().has_transition("q0", "q0"));
    }

    #[test]
    fn remove_state_drops_output_and_start() {
        let mut model = sample();
        model.remove_state("q0");

        assert!(model.start_state().is_none());
        assert_eq!(model.state_output("q0"), "");
        assert!(!model.contains_state("q0"));
    }

    #[test]
    fn rename_state_moves_output() {
        let mut model = sample();
        model.rename_state("q1", "mid").unwrap();

        assert_eq!(model.state_output("mid"), "y");
        assert_eq!(model.state_output("q1"), "");
        assert_eq!(model.do_transition("q0", 'a').unwrap(), "mid");
        assert!(model.has_transition("mid", "q0"));
    }

    #[test]
    fn rename_state_rejects_output_only_name() {
        let mut model = sample();
        model.set_state_output("lonely", "z");

        assert!(model.rename_state("q0", "lonely").is_err());
        assert_eq!(model.start_state().unwrap(), "q0");
    }

    #[test]
    fn states_include_output_keys() {
        let mut model = MooreModel::new();
        model.add_transition("a", 'x', "b");
        model.set_state_output("c", "1");

        let names: Vec<String> = model.states().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn symbols_between_lists_parallel_edges() {
        let mut model = sample();
        model.add_transition("q0", 'c', "q1");

        assert_eq!(model.symbols_between("q0", "q1"), vec!['a', 'c']);
        assert!(model.symbols_between("q1", "q1").is_empty());
    }
}
