//! Status effect engine.
//!
//! ## Key Types
//!
//! - `StatusKind`: Canonical status names (aliases normalized on input)
//! - `StatusParams`: Optional power, multiplier and duration
//! - `StatusEffects`: Per-combatant bag, one live instance per kind
//! - `StatusRegistry`: Kind to tick handler table, built once per battle
//! - `tick_statuses`: Apply handlers and count durations down
//!
//! ## Tick Semantics
//!
//! Within a combatant, statuses tick in insertion order. A status with a
//! duration applies its effect on every tick, including the one that brings
//! the duration to zero, and is removed in that same pass. Dodge never
//! counts down; it is consumed by the next incoming hit.

pub mod effects;
pub mod engine;
pub mod kind;
pub mod registry;

pub use effects::{StatusEffects, StatusParams};
pub use engine::{apply_named_status, apply_status_to_target, tick_statuses};
pub use kind::StatusKind;
pub use registry::{StatusHandler, StatusRegistry};
