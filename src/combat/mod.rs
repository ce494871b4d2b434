//! Combat resolution: the damage pipeline and card effects.
//!
//! ## Key Types
//!
//! - `damage`: Pure damage pipeline (strength, weakness, vulnerability)
//! - `CombatContext`: RNG and event log borrowed for one resolution step
//! - `resolve_card`: Dispatch a played card's effect by type

pub mod context;
pub mod damage;
pub mod resolve;

pub use context::CombatContext;
pub use damage::{compute_damage, compute_scaled_damage, POWER_ATTACK_SCALE};
pub use resolve::{resolve_card, CARD_STATUS_DURATION};
