//! Health, shield and status bag shared by every combatant.
//!
//! `CombatStats` enforces `0 <= health <= max_health` and `shield >= 0`;
//! all mutation goes through methods so the invariants cannot be bypassed.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::status::{StatusEffects, StatusKind};

/// Chance that an active dodge evades an incoming hit.
pub const DODGE_CHANCE: f64 = 0.5;

/// What happened when damage was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// The hit was evaded by dodge; nothing else changed.
    pub evaded: bool,
    /// A dodge status was consumed by this hit (evaded or not).
    pub dodge_consumed: bool,
    /// Damage eaten by shield.
    pub absorbed: i32,
    /// Health actually lost.
    pub dealt: i32,
    /// Health is zero after the hit.
    pub defeated: bool,
}

impl DamageOutcome {
    /// Damage that landed, on shield or health.
    #[must_use]
    pub fn landed(&self) -> i32 {
        self.absorbed + self.dealt
    }
}

/// Health, shield and statuses of one combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    health: i32,
    max_health: i32,
    shield: i32,
    statuses: StatusEffects,
}

impl CombatStats {
    /// Full-health stats. A negative maximum is treated as zero.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(0);
        Self {
            health: max_health,
            max_health,
            shield: 0,
            statuses: StatusEffects::new(),
        }
    }

    /// Start at a given health, clamped to `[0, max_health]`.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.set_health(health);
        self
    }

    /// Start with a shield.
    #[must_use]
    pub fn with_shield(mut self, shield: i32) -> Self {
        self.shield = shield.max(0);
        self
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[must_use]
    pub fn shield(&self) -> i32 {
        self.shield
    }

    #[must_use]
    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    pub fn statuses_mut(&mut self) -> &mut StatusEffects {
        &mut self.statuses
    }

    /// Set health, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// `health / max_health`, or 0 when max health is 0.
    #[must_use]
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }

    /// Add shield. Negative amounts are ignored.
    pub fn add_shield(&mut self, amount: i32) {
        self.shield = self.shield.saturating_add(amount.max(0));
    }

    /// Remove all shield.
    pub fn clear_shield(&mut self) {
        self.shield = 0;
    }

    /// Incoming hit: dodge check, then shield, then health.
    ///
    /// An active dodge is consumed by the hit whether or not the coin flip
    /// succeeds.
    pub fn take_damage(&mut self, amount: i32, rng: &mut GameRng) -> DamageOutcome {
        if self.statuses.remove(StatusKind::Dodge).is_some() {
            if rng.gen_bool(DODGE_CHANCE) {
                return DamageOutcome {
                    evaded: true,
                    dodge_consumed: true,
                    defeated: !self.is_alive(),
                    ..DamageOutcome::default()
                };
            }
            let mut outcome = self.apply_damage(amount);
            outcome.dodge_consumed = true;
            return outcome;
        }
        self.apply_damage(amount)
    }

    /// Damage through shield into health, skipping the dodge check.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        let amount = amount.max(0);
        let absorbed = amount.min(self.shield);
        self.shield -= absorbed;

        let dealt = (amount - absorbed).min(self.health);
        self.health -= dealt;

        DamageOutcome {
            evaded: false,
            dodge_consumed: false,
            absorbed,
            dealt,
            defeated: self.health == 0,
        }
    }

    /// Heal up to max health. Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health);
        self.health - before
    }
}
