//! Roster snapshots
//!
//! Optional persistence collaborator: exports the record collection and id
//! counter as JSON and replays them into a session through its gated import
//! entry point. The core stays persistence-free; everything here lives at the
//! shell boundary.

use anyhow::Context;
use roster_core::{RecordId, TripRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a roster: records plus the id counter
///
/// The counter travels with the records so ids stay monotonic across a
/// save/load cycle even when the highest-id record was deleted before the
/// save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Records in their maintained order
    pub records: Vec<TripRecord>,
    /// Id the next committed record would have received
    pub next_id: RecordId,
}

impl Snapshot {
    /// Capture a snapshot of the given state
    #[inline]
    #[must_use]
    pub fn capture(records: &[TripRecord], next_id: RecordId) -> Self {
        Self {
            records: records.to_vec(),
            next_id,
        }
    }

    /// Write the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), count = self.records.len(), "snapshot saved");
        Ok(())
    }

    /// Read a snapshot back from JSON
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;
        tracing::info!(path = %path.display(), count = snapshot.records.len(), "snapshot loaded");
        Ok(snapshot)
    }
}
