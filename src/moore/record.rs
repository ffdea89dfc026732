//! Plain record form of a Moore model.

use crate::core::StateId;
use crate::record::{self, RecordErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::MooreModel;

/// Structural snapshot of a [`MooreModel`].
///
/// ```json
/// {
///   "transitions": { "q0": { "a": "q1" } },
///   "startState": "q0",
///   "stateOutputs": { "q1": "y" }
/// }
/// ```
///
/// `stateOutputs` may be omitted and then reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MooreRecord {
    pub transitions: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub start_state: Option<String>,
    #[serde(default)]
    pub state_outputs: BTreeMap<String, String>,
}

impl MooreRecord {
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
            for (symbol, target) in bucket {
                checks.push(record::check_symbol(source, symbol));
                checks.push(record::check_state(target, || {
                    format!("target of '{source}' on '{symbol}'")
                }));
            }
        }
        if let Some(start) = &self.start_state {
            checks.push(record::check_state(start, || "start state".to_string()));
        }
        for state in self.state_outputs.keys() {
            checks.push(record::check_state(state, || "state output key".to_string()));
        }
        record::collect(checks)
    }
}

impl From<&MooreModel> for MooreRecord {
    fn from(model: &MooreModel) -> Self {
        let transitions = model
            .buckets()
            .map(|(source, bucket)| {
                let edges = bucket
                    .iter()
                    .map(|(symbol, next)| (symbol.to_string(), next.to_string()))
                    .collect();
                (source.to_string(), edges)
            })
            .collect();

        let state_outputs = model
            .state_outputs()
            .iter()
            .map(|(state, output)| (state.to_string(), output.clone()))
            .collect();

        Self {
            transitions,
            start_state: model.start_state().map(ToString::to_string),
            state_outputs,
        }
    }
}

impl TryFrom<MooreRecord> for MooreModel {
    type Error = RecordErrors;

    fn try_from(raw: MooreRecord) -> Result<Self, Self::Error> {
        raw.validate()?;

        let transitions = raw
            .transitions
            .into_iter()
            .map(|(source, bucket)| {
                let bucket = bucket
                    .into_iter()
                    .filter_map(|(symbol, target)| {
                        Some((record::single_char(&symbol)?, StateId::from(target)))
                    })
                    .collect();
                (StateId::from(source), bucket)
            })
            .collect();

        let state_outputs = raw
            .state_outputs
            .into_iter()
            .map(|(state, output)| (StateId::from(state), output))
            .collect();

        Ok(MooreModel::from_parts(
            transitions,
            raw.start_state.map(StateId::from),
            state_outputs,
        ))
    }
}
