//! Builder for Moore models.

use crate::builder::error::BuildError;
use crate::core::StateId;
use crate::moore::MooreModel;

/// Builder for constructing Moore models with a fluent API.
///
/// # Example
///
/// ```rust
/// use transducer_sim::builder::MooreBuilder;
///
/// let model = MooreBuilder::new()
///     .start("low")
///     .output("low", "0")
///     .output("high", "1")
///     .transition("low", '+', "high")
///     .transition("high", '-', "low")
///     .build()
///     .unwrap();
///
/// assert_eq!(model.state_output("high"), "1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MooreBuilder {
    start: Option<StateId>,
    transitions: Vec<(StateId, char, StateId)>,
    outputs: Vec<(StateId, String)>,
}

impl MooreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Add a transition. Later transitions on the same `(source, symbol)` win.
    pub fn transition(
        mut self,
        source: impl Into<StateId>,
        symbol: char,
        target: impl Into<StateId>,
    ) -> Self {
        self.transitions
            .push((source.into(), symbol, target.into()));
        self
    }

    /// Set the output of a state (optional).
    pub fn output(mut self, state: impl Into<StateId>, output: impl Into<String>) -> Self {
        self.outputs.push((state.into(), output.into()));
        self
    }

    /// Build the model.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MooreModel, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut model = MooreModel::new();
        for (source, symbol, target) in self.transitions {
            model.add_transition(source, symbol, target);
        }
        for (state, output) in self.outputs {
            model.set_state_output(state, output);
        }
        model.set_start_state(start);

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = MooreBuilder::new().transition("a", 'x', "b").build();
        assert_eq!(result, Err(BuildError::MissingStartState));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = MooreBuilder::new().start("a").output("a", "1").build();
        assert_eq!(result, Err(BuildError::NoTransitions));
    }

    #[test]
    fn fluent_api_builds_model() {
        let model = MooreBuilder::new()
            .start("q0")
            .transition("q0", 'a', "q1")
            .output("q1", "y")
            .build()
            .unwrap();

        assert_eq!(model.start_state().unwrap(), "q0");
        assert_eq!(model.do_transition("q0", 'a').unwrap(), "q1");
        assert_eq!(model.state_output("q1"), "y");
    }
}
