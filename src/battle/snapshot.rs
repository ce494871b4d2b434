//! Read-only view of a battle for the presentation layer.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::state::BattleState;
use crate::cards::Card;
use crate::combatant::Combatant;
use crate::core::CombatantId;
use crate::status::StatusEffects;

/// One combatant's visible vitals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub shield: i32,
    pub statuses: StatusEffects,
}

impl CombatantView {
    /// Capture a combatant.
    #[must_use]
    pub fn of(combatant: &dyn Combatant) -> Self {
        Self {
            id: combatant.id(),
            name: combatant.name().to_string(),
            health: combatant.health(),
            max_health: combatant.max_health(),
            shield: combatant.shield(),
            statuses: combatant.statuses().clone(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Everything the presentation layer draws each frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub state: BattleState,
    pub player: CombatantView,
    pub enemies: Vec<CombatantView>,
    pub hand: Vec<Card>,
    pub selected: Vec<usize>,
    pub energy: i32,
    pub max_energy: i32,
    pub deck_size: usize,
    pub discard_size: usize,
    pub input_locked: bool,
}

impl BattleSnapshot {
    pub(crate) fn capture(arena: &Arena, input_locked: bool) -> Self {
        let player = arena.player();
        Self {
            state: arena.state(),
            player: CombatantView::of(player),
            enemies: arena.enemies().iter().map(|e| CombatantView::of(e)).collect(),
            hand: player.hand().to_vec(),
            selected: player.selected_indices().to_vec(),
            energy: player.energy(),
            max_energy: player.max_energy(),
            deck_size: player.deck().len(),
            discard_size: player.discard_pile().len(),
            input_locked,
        }
    }
}
