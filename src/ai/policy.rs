//! Enemy decision policies.
//!
//! A policy only decides; it never mutates the enemy. The decision is a
//! weighted draw from a candidate table picked by the enemy's health ratio
//! and current statuses.
//!
//! | Health ratio | Condition     | Candidates                                  |
//! |--------------|---------------|---------------------------------------------|
//! | < 0.3        |               | heal 0.5, defend 0.3, attack 0.2            |
//! | 0.3 to 0.7   | no shield     | defend 0.4, attack 0.4, apply status 0.2    |
//! | 0.3 to 0.7   | shielded      | attack 0.5, apply status 0.5                |
//! | >= 0.7       | strengthened  | power attack 0.5, attack 0.5                |
//! | >= 0.7       | otherwise     | attack 0.7, apply status 0.3                |

use tracing::trace;

use super::action::EnemyAction;
use crate::combatant::{Combatant, Enemy};
use crate::core::GameRng;
use crate::status::StatusKind;

/// Weighted candidate actions.
pub type ActionWeights = &'static [(EnemyAction, f32)];

const CRITICAL: ActionWeights = &[
    (EnemyAction::Heal, 0.5),
    (EnemyAction::Defend, 0.3),
    (EnemyAction::Attack, 0.2),
];

const WOUNDED_UNSHIELDED: ActionWeights = &[
    (EnemyAction::Defend, 0.4),
    (EnemyAction::Attack, 0.4),
    (EnemyAction::ApplyStatus, 0.2),
];

const WOUNDED_SHIELDED: ActionWeights = &[
    (EnemyAction::Attack, 0.5),
    (EnemyAction::ApplyStatus, 0.5),
];

const HEALTHY_STRENGTHENED: ActionWeights = &[
    (EnemyAction::PowerAttack, 0.5),
    (EnemyAction::Attack, 0.5),
];

const HEALTHY: ActionWeights = &[
    (EnemyAction::Attack, 0.7),
    (EnemyAction::ApplyStatus, 0.3),
];

/// Chooses an enemy's action for the turn.
pub trait EnemyPolicy {
    /// Pick an action, or `None` if the enemy cannot act (e.g. it is dead).
    fn choose_action(&self, enemy: &Enemy, rng: &mut GameRng) -> Option<EnemyAction>;
}

/// Health-ratio driven policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthRatioPolicy {
    /// Below this ratio the enemy is critical.
    pub critical_below: f64,
    /// Below this ratio (and at or above critical) the enemy is wounded.
    pub wounded_below: f64,
}

impl Default for HealthRatioPolicy {
    fn default() -> Self {
        Self {
            critical_below: 0.3,
            wounded_below: 0.7,
        }
    }
}

impl HealthRatioPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The candidate table for an enemy's current condition.
    #[must_use]
    pub fn weights_for(&self, enemy: &Enemy) -> ActionWeights {
        let ratio = enemy.stats().health_ratio();
        if ratio < self.critical_below {
            CRITICAL
        } else if ratio < self.wounded_below {
            if enemy.shield() > 0 {
                WOUNDED_SHIELDED
            } else {
                WOUNDED_UNSHIELDED
            }
        } else if enemy.has_status(StatusKind::Strength) {
            HEALTHY_STRENGTHENED
        } else {
            HEALTHY
        }
    }
}

impl EnemyPolicy for HealthRatioPolicy {
    fn choose_action(&self, enemy: &Enemy, rng: &mut GameRng) -> Option<EnemyAction> {
        if !enemy.is_alive() {
            return None;
        }

        let table = self.weights_for(enemy);
        let weights: Vec<f32> = table.iter().map(|&(_, w)| w).collect();
        let action = table[rng.choose_weighted(&weights)?].0;
        trace!(enemy = %enemy.id(), %action, ratio = enemy.stats().health_ratio(), "enemy decided");
        Some(action)
    }
}

/// Always picks the same action. Useful for scripted encounters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPolicy(pub EnemyAction);

impl EnemyPolicy for FixedPolicy {
    fn choose_action(&self, enemy: &Enemy, _rng: &mut GameRng) -> Option<EnemyAction> {
        enemy.is_alive().then_some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatStats;
    use crate::status::StatusParams;

    fn enemy_at(health: i32) -> Enemy {
        Enemy::new(0, "Goblin", 10, 5).with_stats(CombatStats::new(10).with_health(health))
    }

    #[test]
    fn test_dead_enemy_has_no_action() {
        let mut rng = GameRng::new(1);
        assert_eq!(HealthRatioPolicy::new().choose_action(&enemy_at(0), &mut rng), None);
        assert_eq!(
            FixedPolicy(EnemyAction::Attack).choose_action(&enemy_at(0), &mut rng),
            None
        );
    }

    #[test]
    fn test_critical_table() {
        let policy = HealthRatioPolicy::new();
        assert_eq!(policy.weights_for(&enemy_at(2)), CRITICAL);
    }

    #[test]
    fn test_wounded_tables() {
        let policy = HealthRatioPolicy::new();
        assert_eq!(policy.weights_for(&enemy_at(5)), WOUNDED_UNSHIELDED);
        assert_eq!(policy.weights_for(&enemy_at(3)), WOUNDED_UNSHIELDED);

        let mut shielded = enemy_at(5);
        shielded.stats_mut().add_shield(2);
        assert_eq!(policy.weights_for(&shielded), WOUNDED_SHIELDED);
    }

    #[test]
    fn test_healthy_tables() {
        let policy = HealthRatioPolicy::new();
        assert_eq!(policy.weights_for(&enemy_at(7)), HEALTHY);

        let mut strong = enemy_at(10);
        strong
            .stats_mut()
            .statuses_mut()
            .insert(StatusKind::Strength, StatusParams::new().with_power(2));
        assert_eq!(policy.weights_for(&strong), HEALTHY_STRENGTHENED);
    }

    #[test]
    fn test_choices_stay_in_table() {
        let policy = HealthRatioPolicy::new();
        let mut rng = GameRng::new(99);
        let enemy = enemy_at(10);

        for _ in 0..200 {
            let action = policy.choose_action(&enemy, &mut rng).unwrap();
            assert!(matches!(action, EnemyAction::Attack | EnemyAction::ApplyStatus));
        }
    }

    #[test]
    fn test_decision_does_not_mutate() {
        let policy = HealthRatioPolicy::new();
        let mut rng = GameRng::new(3);
        let enemy = enemy_at(4);
        let before = enemy.clone();

        policy.choose_action(&enemy, &mut rng);
        assert_eq!(enemy, before);
    }
}
