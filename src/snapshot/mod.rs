//! Serializable progress views of a machine.
//!
//! A snapshot records where a machine's cursor stands and how often it has
//! been driven. It is a diagnostic record only: stage private state is not
//! captured and a snapshot cannot be loaded back into a machine.

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Progress of a [`Machine`](crate::Machine) at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Cursor position, `len` when finished
    pub cursor: usize,

    /// Number of stages in the machine
    pub len: usize,

    /// Name of the active stage, absent when finished
    pub active_stage: Option<String>,

    pub finished: bool,

    /// Non-terminal `step` calls so far
    pub polls: u64,

    /// Times the machine has reached its terminal position
    pub runs_completed: u64,
}

impl MachineSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unknown versions and inconsistent data.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if self.len == 0 {
            return Err(SnapshotError::ValidationFailed(
                "machine has no stages".to_string(),
            ));
        }
        if self.cursor > self.len {
            return Err(SnapshotError::ValidationFailed(format!(
                "cursor {} past terminal position {}",
                self.cursor, self.len
            )));
        }
        if self.finished != (self.cursor == self.len) {
            return Err(SnapshotError::ValidationFailed(
                "finished flag disagrees with cursor".to_string(),
            ));
        }
        Ok(())
    }
}
