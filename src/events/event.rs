//! Battle event types.
//!
//! Events are discrete notifications the presentation layer uses to trigger
//! animations (damage numbers, heal flashes, status banners). The engine
//! records them but never reads them back: a battle plays out identically
//! whether or not anyone observes its events.

use serde::{Deserialize, Serialize};

use crate::ai::EnemyAction;
use crate::battle::BattleState;
use crate::cards::CardType;
use crate::core::CombatantId;
use crate::status::StatusKind;

/// Something observable that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// Damage landed on a combatant. `amount` is the health lost,
    /// `absorbed` the part eaten by shield.
    DamageDealt {
        source: Option<CombatantId>,
        target: CombatantId,
        amount: i32,
        absorbed: i32,
    },

    /// A hit was evaded by a dodge.
    Evaded { target: CombatantId },

    /// Health was restored.
    Healed { target: CombatantId, amount: i32 },

    /// Shield was added.
    ShieldGained { target: CombatantId, amount: i32 },

    /// A status was applied or refreshed.
    StatusApplied {
        target: CombatantId,
        status: StatusKind,
    },

    /// A status ran out or was consumed.
    StatusExpired {
        target: CombatantId,
        status: StatusKind,
    },

    /// The player resolved a card.
    CardPlayed {
        card_type: CardType,
        magnitude: i32,
        target: Option<CombatantId>,
    },

    /// An enemy executed a queued action.
    EnemyActed {
        enemy: CombatantId,
        action: EnemyAction,
    },

    /// A new turn began.
    TurnStarted { state: BattleState },

    /// The battle reached a terminal state.
    BattleEnded { state: BattleState },
}

impl BattleEvent {
    /// The combatant this event is about, if any.
    #[must_use]
    pub fn subject(&self) -> Option<CombatantId> {
        match self {
            Self::DamageDealt { target, .. }
            | Self::Evaded { target }
            | Self::Healed { target, .. }
            | Self::ShieldGained { target, .. }
            | Self::StatusApplied { target, .. }
            | Self::StatusExpired { target, .. } => Some(*target),
            Self::CardPlayed { target, .. } => *target,
            Self::EnemyActed { enemy, .. } => Some(*enemy),
            Self::TurnStarted { .. } | Self::BattleEnded { .. } => None,
        }
    }
}
