//! The combat state of one battle.
//!
//! `Arena` owns everything the turn machinery mutates: the player, the
//! enemies, the state, the RNG, the status registry and the event log. It
//! provides the shared steps (status ticks, end checks, turn hand-off);
//! `TurnManager` and `BattleManager` decide when to run them.

use tracing::{debug, info};

use super::state::BattleState;
use crate::combat::CombatContext;
use crate::combatant::{Combatant, Enemy, Player};
use crate::core::{CombatantId, GameRng};
use crate::events::{BattleEvent, BattleLog};
use crate::status::{tick_statuses, StatusKind, StatusRegistry};

/// Combatants plus the shared battle resources.
#[derive(Debug)]
pub struct Arena {
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) state: BattleState,
    pub(crate) rng: GameRng,
    pub(crate) registry: StatusRegistry,
    pub(crate) log: BattleLog,
}

impl Arena {
    /// Create an arena in `PlayerTurn`.
    #[must_use]
    pub fn new(player: Player, enemies: Vec<Enemy>, rng: GameRng) -> Self {
        Self {
            player,
            enemies,
            state: BattleState::PlayerTurn,
            rng,
            registry: StatusRegistry::standard(),
            log: BattleLog::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> BattleState {
        self.state
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[must_use]
    pub fn enemy(&self, slot: usize) -> Option<&Enemy> {
        self.enemies.get(slot)
    }

    /// Enemies still standing.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// A combatant by id.
    #[must_use]
    pub fn combatant(&self, id: CombatantId) -> Option<&dyn Combatant> {
        match id {
            CombatantId::Player => Some(&self.player),
            CombatantId::Enemy(slot) => self.enemies.get(slot).map(|e| e as &dyn Combatant),
        }
    }

    /// Borrow the RNG and log for one resolution step.
    pub fn context(&mut self) -> CombatContext<'_> {
        CombatContext::new(&mut self.rng, &mut self.log)
    }

    /// Evaluate end conditions, entering a terminal state at most once.
    ///
    /// Victory is checked first: if the last enemy and the player fall
    /// together, the battle is won. Returns whether the battle is over.
    pub fn check_battle_end(&mut self) -> bool {
        if self.state.is_terminal() {
            return true;
        }

        let next = if self.enemies.iter().all(|e| !e.is_alive()) {
            BattleState::Victory
        } else if !self.player.is_alive() {
            BattleState::Defeat
        } else {
            return false;
        };

        info!(from = %self.state, to = %next, "battle ended");
        self.state = next;
        self.log.record(BattleEvent::BattleEnded { state: next });
        true
    }

    /// Run one status tick: player first, then enemies by slot.
    pub fn tick_all_statuses(&mut self) {
        let combatants = std::iter::once(&mut self.player as &mut dyn Combatant)
            .chain(self.enemies.iter_mut().map(|e| e as &mut dyn Combatant));
        tick_statuses(&self.registry, combatants, &mut self.log);
    }

    /// Play the player's selection against `target`.
    ///
    /// `None` resolves the selection with no enemy target, so only
    /// self-directed effects apply. Returns the number of cards played.
    pub fn resolve_selection(&mut self, target: Option<usize>) -> usize {
        let enemy = target.and_then(|slot| self.enemies.get_mut(slot));
        let mut ctx = CombatContext::new(&mut self.rng, &mut self.log);
        let played = self
            .player
            .use_selected_cards(enemy.map(|e| e as &mut dyn Combatant), &mut ctx);
        self.check_battle_end();
        played
    }

    /// Hand the turn back to the player.
    ///
    /// Clears the selection, refills energy, draws `draw` cards and drops
    /// an unconsumed dodge.
    pub fn begin_player_turn(&mut self, draw: usize) {
        self.state = BattleState::PlayerTurn;
        self.player.reset_selection();
        self.player.reset_energy();
        if draw > 0 {
            self.player.draw_card(draw, &mut self.rng);
        }
        if self
            .player
            .stats_mut()
            .statuses_mut()
            .remove(StatusKind::Dodge)
            .is_some()
        {
            debug!("unused dodge expired");
            self.log.record(BattleEvent::StatusExpired {
                target: CombatantId::Player,
                status: StatusKind::Dodge,
            });
        }
        self.log.record(BattleEvent::TurnStarted {
            state: BattleState::PlayerTurn,
        });
    }

    /// Take the player out, ending the arena.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.player
    }
}
