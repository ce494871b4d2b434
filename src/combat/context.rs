//! Mutable context threaded through card and enemy action resolution.

use tracing::debug;

use crate::combatant::{Combatant, DamageOutcome};
use crate::core::{CombatantId, GameRng};
use crate::events::{BattleEvent, BattleLog};
use crate::status::{apply_status_to_target, StatusKind, StatusParams};

/// Borrowed RNG and event log for one resolution step.
///
/// The helpers apply an effect to a combatant and record the matching
/// event, so every mutation made during resolution is observable.
pub struct CombatContext<'a> {
    pub rng: &'a mut GameRng,
    pub log: &'a mut BattleLog,
}

impl<'a> CombatContext<'a> {
    /// Create a context.
    pub fn new(rng: &'a mut GameRng, log: &'a mut BattleLog) -> Self {
        Self { rng, log }
    }

    /// Record an event.
    pub fn record(&mut self, event: BattleEvent) {
        self.log.record(event);
    }

    /// Land an already-computed hit on `target`, dodge check included.
    pub fn strike(
        &mut self,
        source: Option<CombatantId>,
        target: &mut dyn Combatant,
        amount: i32,
    ) -> DamageOutcome {
        let id = target.id();
        let outcome = target.stats_mut().take_damage(amount, self.rng);

        if outcome.dodge_consumed {
            self.record(BattleEvent::StatusExpired {
                target: id,
                status: StatusKind::Dodge,
            });
        }

        if outcome.evaded {
            debug!(target = %id, "hit evaded");
            self.record(BattleEvent::Evaded { target: id });
        } else {
            debug!(
                target = %id,
                absorbed = outcome.absorbed,
                dealt = outcome.dealt,
                health = target.health(),
                "damage applied"
            );
            self.record(BattleEvent::DamageDealt {
                source,
                target: id,
                amount: outcome.dealt,
                absorbed: outcome.absorbed,
            });
        }
        outcome
    }

    /// Heal `target`; returns the amount actually healed.
    pub fn heal(&mut self, target: &mut dyn Combatant, amount: i32) -> i32 {
        let healed = target.stats_mut().heal(amount);
        if healed > 0 {
            self.record(BattleEvent::Healed {
                target: target.id(),
                amount: healed,
            });
        }
        healed
    }

    /// Add shield to `target`.
    pub fn add_shield(&mut self, target: &mut dyn Combatant, amount: i32) {
        let amount = amount.max(0);
        target.stats_mut().add_shield(amount);
        self.record(BattleEvent::ShieldGained {
            target: target.id(),
            amount,
        });
    }

    /// Add or refresh a status on `target`.
    pub fn apply_status(&mut self, target: &mut dyn Combatant, kind: StatusKind, params: StatusParams) {
        apply_status_to_target(target, kind, params, self.log);
    }
}
