//! Versioned save and load of machine records.
//!
//! A checkpoint wraps a plain Mealy or Moore record with a format version,
//! an identifier, the machine kind and a timestamp. It can be written as
//! pretty JSON for people to read or as bincode for compact storage.
//! Where the bytes go is up to the caller.

use crate::mealy::{MealyModel, MealyRecord};
use crate::moore::{MooreModel, MooreRecord};
use crate::record::RecordErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Which transducer variant a checkpoint holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineKind {
    Mealy,
    Moore,
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mealy => f.write_str("mealy"),
            Self::Moore => f.write_str("moore"),
        }
    }
}

/// A record that can be checkpointed and restored into its model.
pub trait MachineRecord: Clone + Serialize + for<'de> Deserialize<'de> {
    const KIND: MachineKind;
    type Model;

    fn restore(self) -> Result<Self::Model, RecordErrors>;
}

impl MachineRecord for MealyRecord {
    const KIND: MachineKind = MachineKind::Mealy;
    type Model = MealyModel;

    fn restore(self) -> Result<MealyModel, RecordErrors> {
        MealyModel::try_from(self)
    }
}

impl MachineRecord for MooreRecord {
    const KIND: MachineKind = MachineKind::Moore;
    type Model = MooreModel;

    fn restore(self) -> Result<MooreModel, RecordErrors> {
        MooreModel::try_from(self)
    }
}

/// Leading fields of every checkpoint, read before the machine itself.
#[derive(Deserialize)]
struct Header {
    version: u32,
    #[allow(dead_code)]
    id: String,
    kind: MachineKind,
}

/// Serializable checkpoint of a machine.
///
/// Field order matters for the binary form: the header fields come first
/// so they can be checked before the machine is decoded.
///
/// # Example
///
/// ```rust
/// use transducer_sim::checkpoint::Checkpoint;
/// use transducer_sim::mealy::{MealyModel, MealyRecord};
///
/// let mut model = MealyModel::new();
/// model.add_transition("q0", 'a', "q1", "0");
/// model.set_start_state("q0");
///
/// let json = Checkpoint::new(model.serialize()).to_json().unwrap();
/// let restored = Checkpoint::<MealyRecord>::from_json(&json)
///     .unwrap()
///     .restore()
///     .unwrap();
///
/// assert_eq!(restored, model);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<R: MachineRecord> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// Kind of machine held
    pub kind: MachineKind,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The machine itself
    pub machine: R,
}

impl<R: MachineRecord> Checkpoint<R> {
    pub fn new(machine: R) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            kind: R::KIND,
            timestamp: Utc::now(),
            machine,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let header: Header = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        Self::check_header(&header)?;
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let header: Header = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        Self::check_header(&header)?;
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Validate the held record and build its model.
    pub fn restore(self) -> Result<R::Model, CheckpointError> {
        tracing::debug!(id = %self.id, kind = %self.kind, "restoring checkpoint");
        Ok(self.machine.restore()?)
    }

    fn check_header(header: &Header) -> Result<(), CheckpointError> {
        if header.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: header.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if header.kind != R::KIND {
            return Err(CheckpointError::KindMismatch {
                found: header.kind,
                expected: R::KIND,
            });
        }
        Ok(())
    }
}
