//! Plain record form of a Mealy model.

use crate::core::StateId;
use crate::record::{self, RecordErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{MealyModel, MealyTransition};

/// Target and output of one transition, as stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealyEdge {
    pub state: String,
    pub output: String,
}

/// Structural snapshot of a [`MealyModel`].
///
/// ```json
/// {
///   "transitions": { "q0": { "a": { "state": "q1", "output": "0" } } },
///   "startState": "q0"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealyRecord {
    pub transitions: BTreeMap<String, BTreeMap<String, MealyEdge>>,
    #[serde(default)]
    pub start_state: Option<String>,
}

impl MealyRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check the record without building a model.
    pub fn validate(&self) -> Result<(), RecordErrors> {
        let mut checks = Vec::new();
        for (source, bucket) in &self.transitions {
            checks.push(record::check_state(source, || "transition source".to_string()));
            for (symbol, edge) in bucket {
                checks.push(record::check_symbol(source, symbol));
                checks.push(record::check_state(&edge.state, || {
                    format!("target of '{source}' on '{symbol}'")
                }));
            }
        }
        if let Some(start) = &self.start_state {
            checks.push(record::check_state(start, || "start state".to_string()));
        }
        record::collect(checks)
    }
}

impl From<&MealyModel> for MealyRecord {
    fn from(model: &MealyModel) -> Self {
        let transitions = model
            .buckets()
            .map(|(source, bucket)| {
                let edges = bucket
                    .iter()
                    .map(|(symbol, t)| {
                        let edge = MealyEdge {
                            state: t.next_state.to_string(),
                            output: t.output.clone(),
                        };
                        (symbol.to_string(), edge)
                    })
                    .collect();
                (source.to_string(), edges)
            })
            .collect();

        Self {
            transitions,
            start_state: model.start_state().map(ToString::to_string),
        }
    }
}

impl TryFrom<MealyRecord> for MealyModel {
    type Error = RecordErrors;

    fn try_from(raw: MealyRecord) -> Result<Self, Self::Error> {
        raw.validate()?;

        let transitions = raw
            .transitions
            .into_iter()
            .map(|(source, bucket)| {
                let bucket = bucket
                    .into_iter()
                    .filter_map(|(symbol, edge)| {
                        let symbol = record::single_char(&symbol)?;
                        let transition = MealyTransition {
                            next_state: StateId::from(edge.state),
                            output: edge.output,
                        };
                        Some((symbol, transition))
                    })
                    .collect();
                (StateId::from(source), bucket)
            })
            .collect();

        Ok(MealyModel::from_parts(
            transitions,
            raw.start_state.map(StateId::from),
        ))
    }
}
