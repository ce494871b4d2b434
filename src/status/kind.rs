//! Canonical status names.
//!
//! Every status attached to a combatant is one of a fixed set of kinds.
//! Legacy names (localized spellings, the generic "buff"/"debuff" aliases)
//! are normalized on the way in, so the rest of the engine only ever sees
//! the canonical kind.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigurationError;

/// A canonical status effect kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Damage over time.
    Poison,
    /// Healing over time.
    Regeneration,
    /// Flat bonus to outgoing damage.
    Strength,
    /// Multiplier on outgoing damage.
    Weakness,
    /// Multiplier on incoming damage.
    Vulnerability,
    /// Chance to evade the next incoming hit.
    Dodge,
}

impl StatusKind {
    /// All status kinds, in canonical order.
    pub const ALL: [StatusKind; 6] = [
        StatusKind::Poison,
        StatusKind::Regeneration,
        StatusKind::Strength,
        StatusKind::Weakness,
        StatusKind::Vulnerability,
        StatusKind::Dodge,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poison => "poison",
            Self::Regeneration => "regeneration",
            Self::Strength => "strength",
            Self::Weakness => "weakness",
            Self::Vulnerability => "vulnerability",
            Self::Dodge => "dodge",
        }
    }

    /// Resolve a status name, accepting canonical names and aliases.
    ///
    /// ```
    /// use card_battle::status::StatusKind;
    ///
    /// assert_eq!(StatusKind::from_name("poison"), Some(StatusKind::Poison));
    /// assert_eq!(StatusKind::from_name("debuff"), Some(StatusKind::Vulnerability));
    /// assert_eq!(StatusKind::from_name("Fortalecido"), Some(StatusKind::Strength));
    /// assert_eq!(StatusKind::from_name("confusion"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        let kind = match normalized.as_str() {
            "poison" | "veneno" => Self::Poison,
            "regeneration" | "regen" | "regeneracao" | "regeneração" => Self::Regeneration,
            "strength" | "strengthened" | "buff" | "força" | "forca" | "fortalecido" => {
                Self::Strength
            }
            "weakness" | "weak" | "fraqueza" => Self::Weakness,
            "vulnerability" | "vulnerable" | "debuff" | "vulneravel" | "vulnerável"
            | "vulnerabilidade" => Self::Vulnerability,
            "dodge" | "esquiva" => Self::Dodge,
            _ => return None,
        };
        Some(kind)
    }

    /// Power used when a status carries none.
    #[must_use]
    pub const fn default_power(self) -> i32 {
        match self {
            Self::Poison => 1,
            Self::Regeneration => 2,
            Self::Strength => 1,
            Self::Weakness | Self::Vulnerability | Self::Dodge => 0,
        }
    }

    /// Multiplier used when a status carries none.
    #[must_use]
    pub const fn default_multiplier(self) -> f64 {
        match self {
            Self::Weakness => 0.75,
            Self::Vulnerability => 1.5,
            _ => 1.0,
        }
    }

    /// Whether the kind is harmful to its holder.
    #[must_use]
    pub const fn is_debuff(self) -> bool {
        matches!(self, Self::Poison | Self::Weakness | Self::Vulnerability)
    }
}

impl FromStr for StatusKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigurationError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
