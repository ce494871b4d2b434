//! Battle state machine states.

use serde::{Deserialize, Serialize};

/// Which side acts, or how the battle ended.
///
/// `Victory` and `Defeat` are absorbing: once entered, no combat state
/// changes until the caller dismisses the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleState {
    #[default]
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl BattleState {
    /// Whether the battle is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

impl std::fmt::Display for BattleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PlayerTurn => "PLAYER_TURN",
            Self::EnemyTurn => "ENEMY_TURN",
            Self::Victory => "VICTORY",
            Self::Defeat => "DEFEAT",
        };
        f.write_str(name)
    }
}
