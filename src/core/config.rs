//! Battle configuration types.
//!
//! The data layer configures a battle at startup by providing:
//! - `PlayerConfig`: Player vitals, energy and opening hand
//! - `DeckConfig`: Deck composition and per-type value ranges
//! - `BattleConfig`: Pacing and rule knobs, combining the above
//!
//! All configs have sensible defaults and `with_*` builders, and are
//! serializable so they can be loaded from data files.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use crate::cards::CardType;

/// Inclusive range of magnitudes rolled for a card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    /// Create a new inclusive range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check that the range is non-empty.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Deck composition and card value generation rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// How many cards of each type a generated deck contains.
    pub composition: Vec<(CardType, usize)>,

    /// Magnitude range per card type.
    pub value_ranges: FxHashMap<CardType, ValueRange>,

    /// Uses per card before it is exhausted.
    pub default_max_uses: u32,

    /// Energy cost of generated cards.
    pub default_energy_cost: i32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        let mut value_ranges = FxHashMap::default();
        value_ranges.insert(CardType::Attack, ValueRange::new(10, 15));
        value_ranges.insert(CardType::Defense, ValueRange::new(1, 2));
        value_ranges.insert(CardType::Dodge, ValueRange::new(0, 1));

        Self {
            composition: vec![
                (CardType::Attack, 5),
                (CardType::Defense, 2),
                (CardType::Dodge, 0),
            ],
            value_ranges,
            default_max_uses: 5,
            default_energy_cost: 1,
        }
    }
}

impl DeckConfig {
    /// Create an empty deck config (no cards, default uses and cost).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            composition: Vec::new(),
            value_ranges: FxHashMap::default(),
            ..Self::default()
        }
    }

    /// Build a deck config from named entries `(type name, count, min, max)`.
    ///
    /// Type names accept the canonical English names and the legacy
    /// localized ones. The result is validated before it is returned.
    ///
    /// ```
    /// use card_battle::core::DeckConfig;
    ///
    /// let deck = DeckConfig::from_named(&[("Ataque", 4, 10, 15), ("Defense", 2, 1, 3)]).unwrap();
    /// assert_eq!(deck.total_cards(), 6);
    ///
    /// assert!(DeckConfig::from_named(&[("Magia", 1, 1, 1)]).is_err());
    /// ```
    pub fn from_named(entries: &[(&str, usize, i32, i32)]) -> Result<Self, ConfigurationError> {
        let mut config = Self::empty();
        for &(name, count, min, max) in entries {
            let card_type: CardType = name.parse()?;
            config = config.with_cards(card_type, count, ValueRange::new(min, max));
        }
        config.validate()?;
        Ok(config)
    }

    /// Add (or replace) a card type entry.
    #[must_use]
    pub fn with_cards(mut self, card_type: CardType, count: usize, range: ValueRange) -> Self {
        if let Some(entry) = self.composition.iter_mut().find(|(t, _)| *t == card_type) {
            entry.1 = count;
        } else {
            self.composition.push((card_type, count));
        }
        self.value_ranges.insert(card_type, range);
        self
    }

    /// Set the default number of uses per card.
    #[must_use]
    pub fn with_max_uses(mut self, uses: u32) -> Self {
        self.default_max_uses = uses;
        self
    }

    /// Set the default energy cost per card.
    #[must_use]
    pub fn with_energy_cost(mut self, cost: i32) -> Self {
        self.default_energy_cost = cost;
        self
    }

    /// Total number of cards a generated deck contains.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.composition.iter().map(|(_, count)| count).sum()
    }

    /// Get the value range for a card type.
    #[must_use]
    pub fn range_for(&self, card_type: CardType) -> Option<ValueRange> {
        self.value_ranges.get(&card_type).copied()
    }

    /// Check that every composed type has a valid value range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (card_type, range) in &self.value_ranges {
            if !range.is_valid() {
                return Err(ConfigurationError::InvalidValueRange {
                    card_type: card_type.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for &(card_type, count) in &self.composition {
            if count > 0 && !self.value_ranges.contains_key(&card_type) {
                return Err(ConfigurationError::MissingValueRange(card_type.to_string()));
            }
        }

        if self.default_energy_cost < 0 {
            return Err(ConfigurationError::InvalidValueRange {
                card_type: "energy cost".to_string(),
                min: self.default_energy_cost,
                max: self.default_energy_cost,
            });
        }

        Ok(())
    }
}

/// Player vitals and opening hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,

    /// Starting and maximum health.
    pub max_health: i32,

    /// Energy available each player turn.
    pub max_energy: i32,

    /// Cards drawn when the deck is first dealt.
    pub starting_hand_size: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            max_health: 100,
            max_energy: 3,
            starting_hand_size: 5,
        }
    }
}

impl PlayerConfig {
    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set maximum health.
    #[must_use]
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = health;
        self
    }

    /// Set maximum energy.
    #[must_use]
    pub fn with_max_energy(mut self, energy: i32) -> Self {
        self.max_energy = energy;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Check that vitals are positive.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_health <= 0 {
            return Err(ConfigurationError::InvalidPlayer(format!(
                "max health must be positive, got {}",
                self.max_health
            )));
        }
        if self.max_energy < 0 {
            return Err(ConfigurationError::InvalidPlayer(format!(
                "max energy must not be negative, got {}",
                self.max_energy
            )));
        }
        Ok(())
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Delay between consecutive queued enemy actions.
    pub enemy_action_interval: Duration,

    /// Energy charged by a hand reshuffle.
    pub reshuffle_cost: i32,

    /// Maximum enemies per encounter; extra descriptors are ignored.
    pub max_enemies: usize,

    /// Cards drawn at the start of each player turn after the first.
    pub turn_draw: usize,

    /// Player settings.
    pub player: PlayerConfig,

    /// Deck generation settings.
    pub deck: DeckConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            enemy_action_interval: Duration::from_millis(600),
            reshuffle_cost: 3,
            max_enemies: 3,
            turn_draw: 0,
            player: PlayerConfig::default(),
            deck: DeckConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay between enemy actions.
    #[must_use]
    pub fn with_enemy_action_interval(mut self, interval: Duration) -> Self {
        self.enemy_action_interval = interval;
        self
    }

    /// Set the hand reshuffle cost.
    #[must_use]
    pub fn with_reshuffle_cost(mut self, cost: i32) -> Self {
        self.reshuffle_cost = cost;
        self
    }

    /// Set the enemy cap.
    #[must_use]
    pub fn with_max_enemies(mut self, max: usize) -> Self {
        self.max_enemies = max;
        self
    }

    /// Set the per-turn draw.
    #[must_use]
    pub fn with_turn_draw(mut self, count: usize) -> Self {
        self.turn_draw = count;
        self
    }

    /// Set the player config.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Set the deck config.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Validate nested configs.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.player.validate()?;
        self.deck.validate()
    }
}
