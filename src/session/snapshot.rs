//! Immutable views of a calculator session.
//!
//! A snapshot is an owned copy of everything a renderer needs. Hosts that
//! render in another process can ship snapshots as JSON or as compact
//! binary.

use crate::core::{EntryMode, History, Operator};
use crate::session::error::SnapshotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for the snapshot encoding
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of a calculator after a transition.
///
/// # Example
///
/// ```rust
/// use keycalc::session::{Calculator, Snapshot};
///
/// let mut calc = Calculator::new();
/// assert!(calc.press_all("6 × 7 =").is_ok());
///
/// let snapshot = calc.snapshot();
/// assert_eq!(snapshot.display, "42");
/// assert_eq!(snapshot.history.texts(), vec!["6×7=42"]);
///
/// let json = snapshot.to_json().unwrap();
/// let decoded = Snapshot::from_json(&json).unwrap();
/// assert_eq!(decoded, snapshot);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Encoding version
    pub version: u32,

    /// Session the snapshot was taken from
    pub session_id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Current number text
    pub display: String,

    /// Expression trace of the current computation
    pub expression: String,

    /// Entry mode at the time of the snapshot
    pub mode: EntryMode,

    /// Completed calculations, oldest first
    pub history: History,
}

impl Snapshot {
    /// The operator awaiting its right operand, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.mode.operator()
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unknown versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
