//! Battle orchestration.
//!
//! ## Key Types
//!
//! - `BattleState`: `PlayerTurn`, `EnemyTurn`, `Victory`, `Defeat`
//! - `Arena`: Combatants, RNG, status registry and event log of one battle
//! - `TurnManager`: Enemy turn start, action queue and pacing
//! - `BattleManager`: Facade for input, frame updates and snapshots
//! - `BattleSnapshot`: Serializable per-frame view for presentation
//! - `MonsterCatalog` / `EnemyDescriptor`: Encounter data

pub mod arena;
pub mod catalog;
pub mod manager;
pub mod snapshot;
pub mod state;
pub mod turn;

pub use arena::Arena;
pub use catalog::{EnemyDescriptor, MonsterCatalog, MonsterTemplate};
pub use manager::BattleManager;
pub use snapshot::{BattleSnapshot, CombatantView};
pub use state::BattleState;
pub use turn::{QueuedAction, TurnManager};
