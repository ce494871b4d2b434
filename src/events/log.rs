//! Append-only event log.
//!
//! Backed by `im::Vector` so handing a copy to the presentation layer is
//! O(1) regardless of how long the battle has run.

use im::Vector;
use tracing::trace;

use super::event::BattleEvent;

/// Events recorded since the last drain.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    pending: Vector<BattleEvent>,
    total_recorded: u64,
}

impl BattleLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn record(&mut self, event: BattleEvent) {
        trace!(?event, "battle event");
        self.pending.push_back(event);
        self.total_recorded += 1;
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Cheap copy of the pending events.
    #[must_use]
    pub fn pending(&self) -> Vector<BattleEvent> {
        self.pending.clone()
    }

    /// Iterate over pending events.
    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.pending.iter()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Events recorded over the log's lifetime, drained or not.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }
}
