//! Core engine types: combatant ids, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module depends on.
//! The data layer configures battles via `BattleConfig` rather than
//! modifying engine code.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{BattleConfig, DeckConfig, PlayerConfig, ValueRange};
pub use entity::CombatantId;
pub use error::ConfigurationError;
pub use rng::GameRng;
