//! Status handler registry.
//!
//! The `StatusRegistry` maps each status kind to the handler invoked for it
//! on every status tick. It is built once per battle and then only read.
//!
//! ## Example
//!
//! ```
//! use card_battle::status::{StatusHandler, StatusKind, StatusRegistry};
//!
//! let registry = StatusRegistry::standard();
//!
//! assert_eq!(registry.handler(StatusKind::Poison), Some(StatusHandler::DamageOverTime));
//! assert_eq!(registry.handler(StatusKind::Vulnerability), Some(StatusHandler::Passive));
//! assert!(!registry.decrements(StatusKind::Dodge));
//! ```

use rustc_hash::FxHashMap;

use super::kind::StatusKind;

/// What a status does when ticked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusHandler {
    /// Deal `power` damage to the holder.
    DamageOverTime,
    /// Heal the holder for `power`.
    HealOverTime,
    /// No tick effect; read by the damage pipeline. Duration still counts down.
    Passive,
    /// No tick effect and no countdown; consumed by the next incoming hit.
    OneShot,
}

impl StatusHandler {
    /// Whether ticking counts the status' duration down.
    #[must_use]
    pub const fn decrements(self) -> bool {
        !matches!(self, Self::OneShot)
    }
}

/// Registry of status tick handlers.
#[derive(Clone, Debug, Default)]
pub struct StatusRegistry {
    handlers: FxHashMap<StatusKind, StatusHandler>,
}

impl StatusRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the canonical handler for every status kind.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(StatusKind::Poison, StatusHandler::DamageOverTime);
        registry.register(StatusKind::Regeneration, StatusHandler::HealOverTime);
        registry.register(StatusKind::Strength, StatusHandler::Passive);
        registry.register(StatusKind::Weakness, StatusHandler::Passive);
        registry.register(StatusKind::Vulnerability, StatusHandler::Passive);
        registry.register(StatusKind::Dodge, StatusHandler::OneShot);
        registry
    }

    /// Register (or replace) the handler for a kind.
    pub fn register(&mut self, kind: StatusKind, handler: StatusHandler) {
        self.handlers.insert(kind, handler);
    }

    /// Get the handler for a kind.
    #[must_use]
    pub fn handler(&self, kind: StatusKind) -> Option<StatusHandler> {
        self.handlers.get(&kind).copied()
    }

    /// Whether ticking counts down the kind's duration.
    ///
    /// Unregistered kinds count down like passive statuses.
    #[must_use]
    pub fn decrements(&self, kind: StatusKind) -> bool {
        self.handler(kind).map_or(true, StatusHandler::decrements)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
