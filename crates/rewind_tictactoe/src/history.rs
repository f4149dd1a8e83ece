//! Branching snapshot history.

use super::snapshot::Snapshot;
use super::state::InvalidState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered snapshots, starting from the empty board.
///
/// Never empty. Appending from an earlier step discards every snapshot
/// after that step before pushing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawHistory> for History {
    type Error = InvalidState;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.snapshots.is_empty() {
            return Err(InvalidState("history has no snapshots".to_string()));
        }
        Ok(Self {
            snapshots: raw.snapshots,
        })
    }
}

impl History {
    /// A history holding only the opening snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::genesis()],
        }
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: construction and deserialization both guarantee the
    /// opening snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops everything after `step` and appends `snapshot`.
    ///
    /// Returns the step index of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch_from(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Discarding future snapshots"
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(snapshot);
        self.latest_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
