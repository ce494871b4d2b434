//! Enemy combatants.

use serde::{Deserialize, Serialize};

use super::stats::CombatStats;
use super::Combatant;
use crate::combat::damage;
use crate::core::CombatantId;

/// An enemy in the current encounter.
///
/// Enemies are created at battle start from descriptors and live in a fixed
/// slot; their id is `CombatantId::Enemy(slot)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    slot: usize,
    name: String,
    stats: CombatStats,
    attack_value: i32,
}

impl Enemy {
    /// Create a full-health enemy in a slot.
    #[must_use]
    pub fn new(slot: usize, name: impl Into<String>, max_health: i32, attack_value: i32) -> Self {
        Self {
            slot,
            name: name.into(),
            stats: CombatStats::new(max_health),
            attack_value,
        }
    }

    /// Replace the stats (for setting up mid-fight situations).
    #[must_use]
    pub fn with_stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    /// Slot index in the encounter.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Base damage before modifiers.
    #[must_use]
    pub fn attack_value(&self) -> i32 {
        self.attack_value
    }

    /// Base damage plus the strength bonus.
    #[must_use]
    pub fn calculate_attack(&self) -> i32 {
        self.attack_value
            .saturating_add(damage::strength_bonus(self.stats.statuses()))
    }
}

impl Combatant for Enemy {
    fn id(&self) -> CombatantId {
        CombatantId::Enemy(self.slot)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}
