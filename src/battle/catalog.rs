//! Monster templates and encounter generation.
//!
//! The catalog turns a monster kind and a level into an `EnemyDescriptor`,
//! the only enemy data the battle engine consumes.
//!
//! ## Usage
//!
//! ```
//! use card_battle::battle::MonsterCatalog;
//!
//! let catalog = MonsterCatalog::standard();
//! let goblin = catalog.spawn("goblin", 3).unwrap();
//!
//! assert_eq!(goblin.name, "Goblin Lv.3");
//! assert_eq!(goblin.health, 20);
//! assert_eq!(goblin.attack_value, 9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigurationError, GameRng};

/// Enemy data handed to a battle at start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDescriptor {
    pub name: String,
    pub health: i32,
    pub attack_value: i32,
}

impl EnemyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, health: i32, attack_value: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_value,
        }
    }
}

/// Level-1 stats of a monster kind and how they grow per level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub display_name: String,
    pub base_health: i32,
    pub base_attack: i32,
    pub health_growth: i32,
    pub attack_growth: i32,
}

impl MonsterTemplate {
    #[must_use]
    pub fn new(display_name: impl Into<String>, base_health: i32, base_attack: i32) -> Self {
        Self {
            display_name: display_name.into(),
            base_health,
            base_attack,
            health_growth: 0,
            attack_growth: 0,
        }
    }

    /// Set per-level growth.
    #[must_use]
    pub fn with_growth(mut self, health: i32, attack: i32) -> Self {
        self.health_growth = health;
        self.attack_growth = attack;
        self
    }

    /// Stats at `level` (levels below 1 count as 1).
    #[must_use]
    pub fn at_level(&self, level: u32) -> EnemyDescriptor {
        let level = level.max(1);
        let steps = i32::try_from(level - 1).unwrap_or(i32::MAX);
        let name = if level > 1 {
            format!("{} Lv.{level}", self.display_name)
        } else {
            self.display_name.clone()
        };
        EnemyDescriptor {
            name,
            health: self
                .base_health
                .saturating_add(self.health_growth.saturating_mul(steps)),
            attack_value: self
                .base_attack
                .saturating_add(self.attack_growth.saturating_mul(steps)),
        }
    }
}

/// Monster templates by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCatalog {
    templates: BTreeMap<String, MonsterTemplate>,
}

impl MonsterCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in monsters.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_template("goblin", MonsterTemplate::new("Goblin", 10, 5).with_growth(5, 2))
            .with_template("orc", MonsterTemplate::new("Orc", 5, 3).with_growth(8, 3))
    }

    /// Add (or replace) a template.
    #[must_use]
    pub fn with_template(mut self, kind: impl Into<String>, template: MonsterTemplate) -> Self {
        self.templates.insert(kind.into().to_lowercase(), template);
        self
    }

    /// Known kinds, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    #[must_use]
    pub fn template(&self, kind: &str) -> Option<&MonsterTemplate> {
        self.templates.get(&kind.trim().to_lowercase())
    }

    /// One monster of `kind` at `level`.
    pub fn spawn(&self, kind: &str, level: u32) -> Result<EnemyDescriptor, ConfigurationError> {
        self.template(kind)
            .map(|t| t.at_level(level))
            .ok_or_else(|| ConfigurationError::UnknownMonster(kind.to_string()))
    }

    /// One monster per listed kind, all at `level`.
    pub fn encounter(
        &self,
        kinds: &[&str],
        level: u32,
    ) -> Result<Vec<EnemyDescriptor>, ConfigurationError> {
        kinds.iter().map(|kind| self.spawn(kind, level)).collect()
    }

    /// `count` monsters of random kinds (with repetition) at `level`.
    #[must_use]
    pub fn random_encounter(&self, level: u32, count: usize, rng: &mut GameRng) -> Vec<EnemyDescriptor> {
        let templates: Vec<&MonsterTemplate> = self.templates.values().collect();
        (0..count)
            .filter_map(|_| rng.choose(&templates).map(|t| t.at_level(level)))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
