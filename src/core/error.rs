//! Construction-time configuration errors.
//!
//! Expected game conditions (exhausted card, missing energy, dead target)
//! are never errors: those operations return `bool` or `Option` and leave
//! state untouched. `ConfigurationError` is reserved for malformed data
//! detected while building cards, decks, enemies or a battle, so that a
//! battle in progress can never fail.

/// Malformed configuration detected while building battle inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown card type: {0:?}")]
    UnknownCardType(String),

    #[error("unknown element: {0:?}")]
    UnknownElement(String),

    #[error("unknown status effect: {0:?}")]
    UnknownStatus(String),

    #[error("invalid value range for {card_type}: {min}..={max}")]
    InvalidValueRange {
        card_type: String,
        min: i32,
        max: i32,
    },

    #[error("no value range configured for card type {0}")]
    MissingValueRange(String),

    #[error("unknown monster kind: {0:?}")]
    UnknownMonster(String),

    #[error("invalid enemy {name:?}: {reason}")]
    InvalidEnemy { name: String, reason: String },

    #[error("invalid player configuration: {0}")]
    InvalidPlayer(String),
}

impl ConfigurationError {
    pub(crate) fn invalid_enemy(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnemy {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
