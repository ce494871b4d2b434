//! Combatants: the player and enemies.
//!
//! Both sides share a `CombatStats` value (health, shield, statuses) and the
//! `Combatant` trait, which is what the damage pipeline, status engine and
//! card resolution operate on.
//!
//! ## Key Types
//!
//! - `Combatant`: Capability trait over anything that can take a hit
//! - `CombatStats`: Health/shield/status bag with clamping invariants
//! - `DamageOutcome`: Result of one incoming hit
//! - `Player`: Energy plus the deck/hand/discard economy
//! - `Enemy`: Attack value, driven by an `EnemyPolicy`

pub mod enemy;
pub mod player;
pub mod stats;

pub use enemy::Enemy;
pub use player::Player;
pub use stats::{CombatStats, DamageOutcome, DODGE_CHANCE};

use crate::core::CombatantId;
use crate::status::{StatusEffects, StatusKind, StatusParams};

/// Anything that has health, shield and statuses.
///
/// Implementors only provide identity and access to their stats; the
/// provided methods are shorthands over `CombatStats`.
pub trait Combatant {
    /// Battle-local identity.
    fn id(&self) -> CombatantId;

    /// Display name.
    fn name(&self) -> &str;

    fn stats(&self) -> &CombatStats;

    fn stats_mut(&mut self) -> &mut CombatStats;

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn health(&self) -> i32 {
        self.stats().health()
    }

    fn max_health(&self) -> i32 {
        self.stats().max_health()
    }

    fn shield(&self) -> i32 {
        self.stats().shield()
    }

    fn statuses(&self) -> &StatusEffects {
        self.stats().statuses()
    }

    fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses().contains(kind)
    }

    /// Parameters of a live status, copied out.
    fn status(&self, kind: StatusKind) -> Option<StatusParams> {
        self.statuses().get(kind).copied()
    }
}

/// Reborrow an optional target for one use, keeping the original usable.
pub(crate) fn reborrow<'t>(
    target: &'t mut Option<&mut dyn Combatant>,
) -> Option<&'t mut dyn Combatant> {
    target.as_mut().map(|t| &mut **t as &mut dyn Combatant)
}
