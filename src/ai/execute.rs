//! Enemy action execution.
//!
//! Execution always mutates: attacks go through the damage pipeline into
//! the target, the rest affect the enemy itself (or, for status actions,
//! possibly the target).

use tracing::debug;

use super::action::EnemyAction;
use crate::combat::damage::{compute_scaled_damage, POWER_ATTACK_SCALE};
use crate::combat::CombatContext;
use crate::combatant::{Combatant, Enemy};
use crate::events::BattleEvent;
use crate::status::{StatusKind, StatusParams};

/// Minimum shield gained by `Defend`.
pub const DEFEND_SHIELD_MIN: i32 = 2;

/// Maximum shield gained by `Defend`.
pub const DEFEND_SHIELD_MAX: i32 = 4;

/// Fraction of max health restored by `Heal`.
pub const HEAL_FRACTION: f64 = 0.15;

/// Duration of statuses applied by `ApplyStatus`.
pub const ENEMY_STATUS_DURATION: i32 = 3;

/// Strength power an enemy gives itself with `ApplyStatus`.
pub const ENEMY_STRENGTH_POWER: i32 = 2;

/// Vulnerability multiplier an enemy inflicts with `ApplyStatus`.
pub const ENEMY_VULNERABILITY_MULTIPLIER: f64 = 1.5;

/// Health restored by `Heal` for a given max health (at least 1).
#[must_use]
pub fn heal_amount(max_health: i32) -> i32 {
    ((f64::from(max_health) * HEAL_FRACTION) as i32).max(1)
}

/// Carry out `action` for `enemy` against `target`.
///
/// A dead enemy does nothing; an attack on a dead target is skipped.
pub fn execute_action(
    action: EnemyAction,
    enemy: &mut Enemy,
    target: &mut dyn Combatant,
    ctx: &mut CombatContext<'_>,
) {
    if !enemy.is_alive() {
        debug!(enemy = %enemy.id(), %action, "dead enemy cannot act");
        return;
    }

    ctx.record(BattleEvent::EnemyActed {
        enemy: enemy.id(),
        action,
    });

    match action {
        EnemyAction::Attack | EnemyAction::PowerAttack => {
            if !target.is_alive() {
                debug!(enemy = %enemy.id(), "attack skipped: target already down");
                return;
            }
            let scale = if action == EnemyAction::PowerAttack {
                POWER_ATTACK_SCALE
            } else {
                1.0
            };
            let damage = compute_scaled_damage(
                enemy.attack_value(),
                scale,
                enemy.statuses(),
                target.statuses(),
            );
            ctx.strike(Some(enemy.id()), target, damage);
        }
        EnemyAction::Defend => {
            let amount = ctx
                .rng
                .gen_range_inclusive(DEFEND_SHIELD_MIN..=DEFEND_SHIELD_MAX);
            ctx.add_shield(enemy, amount);
        }
        EnemyAction::Heal => {
            let amount = heal_amount(enemy.max_health());
            ctx.heal(enemy, amount);
        }
        EnemyAction::ApplyStatus => {
            if ctx.rng.gen_bool(0.5) && target.is_alive() {
                let params = StatusParams::new()
                    .with_multiplier(ENEMY_VULNERABILITY_MULTIPLIER)
                    .with_duration(ENEMY_STATUS_DURATION);
                ctx.apply_status(target, StatusKind::Vulnerability, params);
            } else {
                let params = StatusParams::new()
                    .with_power(ENEMY_STRENGTH_POWER)
                    .with_duration(ENEMY_STATUS_DURATION);
                ctx.apply_status(enemy, StatusKind::Strength, params);
            }
        }
    }
}
