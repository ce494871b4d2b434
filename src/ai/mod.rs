//! Enemy AI: decision policy and action execution.
//!
//! Deciding and executing are separate steps: a policy picks an
//! `EnemyAction` without touching state, and `execute_action` applies it.
//! The turn manager decides for every living enemy at the start of the
//! enemy turn and executes the queue one action at a time.

pub mod action;
pub mod execute;
pub mod policy;

pub use action::EnemyAction;
pub use execute::{execute_action, heal_amount};
pub use policy::{EnemyPolicy, FixedPolicy, HealthRatioPolicy};
