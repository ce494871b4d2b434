//! Combatant identification.
//!
//! Every participant in a battle has a `CombatantId`. There is exactly one
//! player; enemies are addressed by their slot in the encounter.
//!
//! ## Usage
//!
//! ```
//! use card_battle::core::CombatantId;
//!
//! let player = CombatantId::Player;
//! let goblin = CombatantId::Enemy(0);
//!
//! assert!(player.is_player());
//! assert_eq!(goblin.enemy_index(), Some(0));
//! assert_eq!(player.enemy_index(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a combatant in the current battle.
///
/// Enemy indices are stable for the lifetime of a battle: dead enemies keep
/// their slot so queued actions and presentation references stay valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatantId {
    /// The (single) player.
    Player,
    /// An enemy by encounter slot (0-based).
    Enemy(usize),
}

impl CombatantId {
    /// Check if this id refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }

    /// Check if this id refers to an enemy.
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemy(_))
    }

    /// Get the enemy slot if this is an enemy.
    #[must_use]
    pub const fn enemy_index(self) -> Option<usize> {
        match self {
            Self::Enemy(index) => Some(index),
            Self::Player => None,
        }
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Enemy(index) => write!(f, "Enemy({})", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let id = CombatantId::Player;
        assert!(id.is_player());
        assert!(!id.is_enemy());
        assert_eq!(id.enemy_index(), None);
    }

    #[test]
    fn test_enemy_id() {
        let id = CombatantId::Enemy(2);
        assert!(id.is_enemy());
        assert!(!id.is_player());
        assert_eq!(id.enemy_index(), Some(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CombatantId::Player), "Player");
        assert_eq!(format!("{}", CombatantId::Enemy(3)), "Enemy(3)");
    }

    #[test]
    fn test_ordering_puts_player_first() {
        let mut ids = vec![CombatantId::Enemy(1), CombatantId::Player, CombatantId::Enemy(0)];
        ids.sort();
        assert_eq!(ids, vec![CombatantId::Player, CombatantId::Enemy(0), CombatantId::Enemy(1)]);
    }

    #[test]
    fn test_serialization() {
        let id = CombatantId::Enemy(1);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CombatantId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
