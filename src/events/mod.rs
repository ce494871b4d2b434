//! Battle notifications for the presentation layer.
//!
//! ## Key Types
//!
//! - `BattleEvent`: One observable happening (damage, heal, status, turn)
//! - `BattleLog`: Append-only buffer the presentation layer drains

pub mod event;
pub mod log;

pub use event::BattleEvent;
pub use log::BattleLog;
