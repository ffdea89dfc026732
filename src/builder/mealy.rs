//! Builder for Mealy models.

use crate::builder::error::BuildError;
use crate::core::StateId;
use crate::mealy::MealyModel;

/// Builder for constructing Mealy models with a fluent API.
///
/// # Example
///
/// ```rust
/// use transducer_sim::builder::MealyBuilder;
///
/// let model = MealyBuilder::new()
///     .start("even")
///     .transition("even", '1', "odd", "1")
///     .transition("odd", '1', "even", "0")
///     .build()
///     .unwrap();
///
/// assert_eq!(model.transition_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MealyBuilder {
    start: Option<StateId>,
    transitions: Vec<(StateId, char, StateId, String)>,
}

impl MealyBuilder {
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
        output: impl Into<String>,
    ) -> Self {
        self.transitions
            .push((source.into(), symbol, target.into(), output.into()));
        self
    }

    /// Build the model.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MealyModel, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut model = MealyModel::new();
        for (source, symbol, target, output) in self.transitions {
            model.add_transition(source, symbol, target, output);
        }
        model.set_start_state(start);

        Ok(model)
    }
}
