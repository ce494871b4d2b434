//! Turn sequencing and enemy action pacing.
//!
//! The enemy turn runs across several `update` calls:
//!
//! 1. The first update after the player ends their turn starts the enemy
//!    turn (once, guarded by a flag): statuses tick for everyone, the battle
//!    end is checked, and every living enemy queues one action.
//! 2. Later updates count the pacing timer down by the elapsed time and
//!    execute one queued action each time it runs out. Actions queued by
//!    enemies that have since died are skipped.
//! 3. When the queue is empty the turn passes back to the player.
//!
//! The battle end is re-checked after every executed action.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace};

use super::arena::Arena;
use super::state::BattleState;
use crate::ai::{execute_action, EnemyAction, EnemyPolicy};
use crate::combat::CombatContext;
use crate::combatant::Combatant;
use crate::events::BattleEvent;

/// One queued enemy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueuedAction {
    pub slot: usize,
    pub action: EnemyAction,
}

/// Drives `PlayerTurn` / `EnemyTurn` transitions.
#[derive(Clone, Debug)]
pub struct TurnManager {
    enemy_turn_started: bool,
    queue: VecDeque<QueuedAction>,
    timer: Duration,
    interval: Duration,
    turn_draw: usize,
}

impl TurnManager {
    /// Create a turn manager pacing enemy actions `interval` apart.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            enemy_turn_started: false,
            queue: VecDeque::new(),
            timer: Duration::ZERO,
            interval,
            turn_draw: 0,
        }
    }

    /// Cards drawn when the turn returns to the player.
    #[must_use]
    pub fn with_turn_draw(mut self, count: usize) -> Self {
        self.turn_draw = count;
        self
    }

    /// Whether enemy actions are queued and waiting to run.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.enemy_turn_started && !self.queue.is_empty()
    }

    /// Actions still waiting, in execution order.
    pub fn pending_actions(&self) -> impl Iterator<Item = &QueuedAction> {
        self.queue.iter()
    }

    /// Time left before the next queued action runs.
    #[must_use]
    pub fn time_until_next_action(&self) -> Duration {
        self.timer
    }

    /// Explicit end of the player's turn.
    ///
    /// Checks the battle end first, so a battle with no enemies left goes
    /// straight to `Victory`. Returns whether the enemy turn was entered.
    pub fn end_player_turn(&mut self, arena: &mut Arena) -> bool {
        if arena.state != BattleState::PlayerTurn {
            return false;
        }
        if arena.check_battle_end() {
            return false;
        }

        arena.player.reset_selection();
        arena.state = BattleState::EnemyTurn;
        self.enemy_turn_started = false;
        debug!("player turn ended");
        true
    }

    /// Advance by `dt`. A no-op outside `EnemyTurn`.
    pub fn update(&mut self, arena: &mut Arena, policy: &dyn EnemyPolicy, dt: Duration) {
        if arena.state != BattleState::EnemyTurn {
            return;
        }
        if self.enemy_turn_started {
            self.process_enemy_actions(arena, dt);
        } else {
            self.start_enemy_turn(arena, policy);
        }
    }

    fn start_enemy_turn(&mut self, arena: &mut Arena, policy: &dyn EnemyPolicy) {
        if self.enemy_turn_started {
            return;
        }
        self.enemy_turn_started = true;
        arena.log.record(BattleEvent::TurnStarted {
            state: BattleState::EnemyTurn,
        });

        arena.tick_all_statuses();
        if arena.check_battle_end() {
            return;
        }

        self.queue.clear();
        for enemy in arena.enemies.iter().filter(|e| e.is_alive()) {
            if let Some(action) = policy.choose_action(enemy, &mut arena.rng) {
                debug!(enemy = %enemy.id(), %action, "enemy action queued");
                self.queue.push_back(QueuedAction {
                    slot: enemy.slot(),
                    action,
                });
            }
        }

        if self.queue.is_empty() {
            self.end_enemy_turn(arena);
            return;
        }
        self.timer = self.interval;
    }

    fn process_enemy_actions(&mut self, arena: &mut Arena, dt: Duration) {
        if self.queue.is_empty() {
            self.end_enemy_turn(arena);
            return;
        }

        self.timer = self.timer.saturating_sub(dt);
        if !self.timer.is_zero() {
            trace!(remaining = ?self.timer, "waiting for next enemy action");
            return;
        }

        while let Some(QueuedAction { slot, action }) = self.queue.pop_front() {
            let Some(enemy) = arena.enemies.get_mut(slot) else {
                continue;
            };
            if !enemy.is_alive() {
                debug!(enemy = %enemy.id(), %action, "skipping action of fallen enemy");
                continue;
            }

            let mut ctx = CombatContext::new(&mut arena.rng, &mut arena.log);
            execute_action(action, enemy, &mut arena.player, &mut ctx);

            if arena.check_battle_end() {
                self.queue.clear();
                return;
            }
            break;
        }

        if self.queue.is_empty() {
            self.timer = Duration::ZERO;
            self.end_enemy_turn(arena);
        } else {
            self.timer = self.interval;
        }
    }

    fn end_enemy_turn(&mut self, arena: &mut Arena) {
        if arena.state != BattleState::EnemyTurn {
            return;
        }
        self.enemy_turn_started = false;
        self.queue.clear();
        arena.begin_player_turn(self.turn_draw);
        debug!("enemy turn ended");
    }
}
