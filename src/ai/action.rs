//! Enemy actions.

use serde::{Deserialize, Serialize};

/// One thing an enemy can do on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyAction {
    /// Hit the player for the enemy's attack value.
    Attack,
    /// Hit the player for 1.5x.
    PowerAttack,
    /// Gain a small random shield.
    Defend,
    /// Recover a fraction of max health.
    Heal,
    /// Weaken the player or strengthen itself.
    ApplyStatus,
}

impl EnemyAction {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::PowerAttack => "power_attack",
            Self::Defend => "defend",
            Self::Heal => "heal",
            Self::ApplyStatus => "apply_status",
        }
    }

    /// Whether the action damages the player.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::Attack | Self::PowerAttack)
    }
}

impl std::fmt::Display for EnemyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
