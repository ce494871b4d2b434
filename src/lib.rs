//! # card-battle
//!
//! A deterministic, turn-based card battle engine.
//!
//! One player fights up to three enemies. The player spends energy to
//! select cards from a hand and plays them at a target; enemies act on
//! their own turn through a health-driven decision policy. Statuses
//! (poison, regeneration, strength, weakness, vulnerability, dodge) tick
//! once per enemy turn and feed a pure damage pipeline.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through one seeded `GameRng`.
//!    Same seed and same inputs produce the same battle.
//!
//! 2. **Frame-Driven**: `BattleManager::update(dt)` advances timers; nothing
//!    blocks. Enemy actions are paced by a countdown, not a wait.
//!
//! 3. **Silent Rejection**: Invalid input (wrong turn, missing energy,
//!    exhausted card, bad target) returns `false` and changes nothing.
//!    Only malformed configuration is an error, and only at construction.
//!
//! ## Modules
//!
//! - `core`: Combatant ids, RNG, configuration, errors
//! - `cards`: Cards, card types, elements, deck generation
//! - `status`: Status kinds, parameters, registry, ticking
//! - `combatant`: `Combatant` trait, `Player`, `Enemy`
//! - `combat`: Damage pipeline and card effect resolution
//! - `ai`: Enemy decision policy and action execution
//! - `events`: Notifications for the presentation layer
//! - `battle`: Turn machinery, battle facade, encounters

pub mod ai;
pub mod battle;
pub mod cards;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod events;
pub mod status;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, CombatantId, ConfigurationError, DeckConfig, GameRng, PlayerConfig, ValueRange,
};

pub use crate::cards::{generate_deck, Card, CardState, CardType, Element};

pub use crate::status::{
    apply_status_to_target, tick_statuses, StatusEffects, StatusHandler, StatusKind, StatusParams,
    StatusRegistry,
};

pub use crate::combatant::{CombatStats, Combatant, DamageOutcome, Enemy, Player};

pub use crate::combat::{compute_damage, compute_scaled_damage, resolve_card, CombatContext};

pub use crate::ai::{execute_action, EnemyAction, EnemyPolicy, FixedPolicy, HealthRatioPolicy};

pub use crate::events::{BattleEvent, BattleLog};

pub use crate::battle::{
    Arena, BattleManager, BattleSnapshot, BattleState, CombatantView, EnemyDescriptor,
    MonsterCatalog, MonsterTemplate, TurnManager,
};
