//! Top-level battle facade.
//!
//! `BattleManager` owns one battle: it takes the session's player for the
//! duration of the fight, builds enemies from descriptors, routes player
//! input to card resolution, drives the turn machinery from per-frame
//! `update` calls and exposes read-only state to the presentation layer.
//!
//! Input is rejected (returns `false`, changes nothing) outside the
//! player's turn and while enemy actions are being paced out.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use card_battle::battle::{BattleManager, BattleState, MonsterCatalog};
//! use card_battle::core::{BattleConfig, CombatantId};
//!
//! let config = BattleConfig::default();
//! let enemies = MonsterCatalog::standard().encounter(&["goblin"], 1).unwrap();
//! let mut battle = BattleManager::with_new_player(&config, enemies, None, 42).unwrap();
//!
//! if battle.select_card(0) {
//!     battle.target(CombatantId::Enemy(0));
//! }
//! battle.end_turn();
//! while battle.state() == BattleState::EnemyTurn {
//!     battle.update(Duration::from_millis(16));
//! }
//! assert!(battle.state() != BattleState::EnemyTurn);
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use super::arena::Arena;
use super::catalog::EnemyDescriptor;
use super::snapshot::BattleSnapshot;
use super::state::BattleState;
use super::turn::TurnManager;
use crate::ai::{EnemyPolicy, HealthRatioPolicy};
use crate::cards::{generate_deck, Element};
use crate::combatant::{Combatant, Enemy, Player};
use crate::core::{BattleConfig, CombatantId, ConfigurationError, GameRng};
use crate::events::{BattleEvent, BattleLog};

/// One battle in progress.
pub struct BattleManager {
    arena: Arena,
    turns: TurnManager,
    policy: Box<dyn EnemyPolicy>,
    reshuffle_cost: i32,
}

impl BattleManager {
    /// Start a battle with an existing player.
    ///
    /// The player's selection is cleared and energy refilled. At most
    /// `config.max_enemies` descriptors are used; the rest are ignored.
    pub fn new(
        mut player: Player,
        enemies: Vec<EnemyDescriptor>,
        config: &BattleConfig,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        if enemies.len() > config.max_enemies {
            warn!(
                given = enemies.len(),
                max = config.max_enemies,
                "too many enemies, extras ignored"
            );
        }

        let enemies = enemies
            .into_iter()
            .take(config.max_enemies)
            .enumerate()
            .map(|(slot, descriptor)| build_enemy(slot, descriptor))
            .collect::<Result<Vec<_>, _>>()?;

        player.reset_selection();
        player.reset_energy();

        info!(
            player = player.name(),
            enemies = enemies.len(),
            seed,
            "battle started"
        );

        let mut arena = Arena::new(player, enemies, GameRng::new(seed));
        arena.log.record(BattleEvent::TurnStarted {
            state: BattleState::PlayerTurn,
        });

        Ok(Self {
            arena,
            turns: TurnManager::new(config.enemy_action_interval).with_turn_draw(config.turn_draw),
            policy: Box::new(HealthRatioPolicy::default()),
            reshuffle_cost: config.reshuffle_cost,
        })
    }

    /// Start a battle with a fresh player built from `config`: a generated
    /// deck and a dealt opening hand.
    pub fn with_new_player(
        config: &BattleConfig,
        enemies: Vec<EnemyDescriptor>,
        thematic: Option<Element>,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut deck_rng = GameRng::new(seed).for_context("deck");
        let deck = generate_deck(&config.deck, thematic, &mut deck_rng)?;

        let mut player = Player::new(&config.player);
        player.set_deck(&deck, &mut deck_rng);
        player.draw_card(config.player.starting_hand_size, &mut deck_rng);

        Self::new(player, enemies, config, seed)
    }

    /// Replace the enemy decision policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // === Read-only state ===

    #[must_use]
    pub fn state(&self) -> BattleState {
        self.arena.state()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.arena.state().is_terminal()
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        self.arena.player()
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        self.arena.enemies()
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    /// Whether player input is currently rejected.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.arena.state() != BattleState::PlayerTurn || self.turns.is_busy()
    }

    /// Capture everything the presentation layer needs this frame.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(&self.arena, self.input_locked())
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.arena.log.drain()
    }

    /// The event log.
    #[must_use]
    pub fn log(&self) -> &BattleLog {
        &self.arena.log
    }

    // === Player input ===

    /// Select the hand card at `index`, reserving its energy.
    pub fn select_card(&mut self, index: usize) -> bool {
        if self.reject_input("select card") {
            return false;
        }
        self.arena.player.select_card_by_index(index)
    }

    /// Deselect the hand card at `index`, refunding its energy.
    pub fn deselect_card(&mut self, index: usize) -> bool {
        if self.reject_input("deselect card") {
            return false;
        }
        self.arena.player.deselect_card_by_index(index)
    }

    /// Cancel the whole selection.
    pub fn reset_selection(&mut self) {
        if self.reject_input("reset selection") {
            return;
        }
        self.arena.player.reset_selection();
    }

    /// Play the selection against `target`.
    ///
    /// Targeting a living enemy plays every selected card at it. Targeting
    /// the player plays a selection with no offensive cards. Any other
    /// target cancels the selection (refunding its energy) and fails.
    pub fn target(&mut self, target: CombatantId) -> bool {
        if self.reject_input("target") {
            return false;
        }
        if self.arena.player.selected_indices().is_empty() {
            debug!(%target, "target ignored: nothing selected");
            return false;
        }

        let slot = match target {
            CombatantId::Enemy(slot)
                if self.arena.enemy(slot).is_some_and(|e| e.is_alive()) =>
            {
                Some(slot)
            }
            CombatantId::Player
                if !self
                    .arena
                    .player
                    .selected_cards()
                    .any(|c| c.card_type().is_offensive()) =>
            {
                None
            }
            _ => {
                debug!(%target, "invalid target, selection cancelled");
                self.arena.player.reset_selection();
                return false;
            }
        };

        self.arena.resolve_selection(slot) > 0
    }

    /// Select the card at `index` and play it against `target` in one step.
    ///
    /// A rejected play leaves the previous selection and energy as they were.
    pub fn play_card(&mut self, index: usize, target: CombatantId) -> bool {
        if self.reject_input("play card") {
            return false;
        }
        let previous = self.arena.player.selected_indices().to_vec();
        if !self.arena.player.select_only(index) {
            return false;
        }
        if self.target(target) {
            return true;
        }
        self.arena.player.restore_selection(&previous);
        false
    }

    /// Discard the hand and draw it again for the configured energy cost.
    pub fn reshuffle_hand(&mut self) -> bool {
        if self.reject_input("reshuffle hand") {
            return false;
        }
        self.arena
            .player
            .reshuffle_hand(self.reshuffle_cost, &mut self.arena.rng)
    }

    /// End the player's turn.
    ///
    /// With no living enemy left this goes straight to `Victory`.
    pub fn end_turn(&mut self) -> bool {
        if self.reject_input("end turn") {
            return false;
        }
        self.turns.end_player_turn(&mut self.arena)
    }

    // === Frame driver ===

    /// Advance the battle by `dt`.
    pub fn update(&mut self, dt: Duration) {
        if self.arena.state().is_terminal() {
            return;
        }
        self.turns.update(&mut self.arena, self.policy.as_ref(), dt);
    }

    // === Leaving ===

    /// Leave the battle (flee), returning the player.
    #[must_use]
    pub fn abandon(self) -> Player {
        info!(state = %self.arena.state(), "battle abandoned");
        self.arena.into_player()
    }

    /// Dismiss a finished battle, returning the player.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.arena.into_player()
    }

    fn reject_input(&self, input: &str) -> bool {
        let locked = self.input_locked();
        if locked {
            debug!(input, state = %self.arena.state(), "input rejected");
        }
        locked
    }
}

impl std::fmt::Debug for BattleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleManager")
            .field("arena", &self.arena)
            .field("turns", &self.turns)
            .field("reshuffle_cost", &self.reshuffle_cost)
            .finish_non_exhaustive()
    }
}

fn build_enemy(slot: usize, descriptor: EnemyDescriptor) -> Result<Enemy, ConfigurationError> {
    if descriptor.health <= 0 {
        return Err(ConfigurationError::invalid_enemy(
            descriptor.name,
            format!("health must be positive, got {}", descriptor.health),
        ));
    }
    if descriptor.attack_value < 0 {
        return Err(ConfigurationError::invalid_enemy(
            descriptor.name,
            format!("attack must not be negative, got {}", descriptor.attack_value),
        ));
    }
    Ok(Enemy::new(
        slot,
        descriptor.name,
        descriptor.health,
        descriptor.attack_value,
    ))
}
