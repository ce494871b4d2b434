//! Cards: one combat action each.
//!
//! A `Card` carries its type, magnitude, element, energy cost and a use
//! budget. Playing a card spends one use; a card with no uses left is
//! `Exhausted` and can never be selected again until it is reset or cloned.
//!
//! ## Usage
//!
//! ```
//! use card_battle::cards::{Card, CardState, CardType, Element};
//!
//! let card = Card::new(CardType::Attack, 12, Element::Fire).with_max_uses(2);
//! assert_eq!(card.uses_remaining(), 2);
//! assert_eq!(card.state(), CardState::Idle);
//! assert!(card.requires_energy(1));
//! assert!(!card.requires_energy(0));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{resolve_card, CombatContext};
use crate::combatant::Combatant;
use crate::core::ConfigurationError;
use crate::status::{StatusKind, StatusParams};

/// Uses a card gets when none are configured.
pub const DEFAULT_MAX_USES: u32 = 5;

/// Energy a card costs when none is configured.
pub const DEFAULT_ENERGY_COST: i32 = 1;

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardType {
    /// Damage the target through the damage pipeline.
    Attack,
    /// Add shield to the user.
    Defense,
    /// Give the user a one-shot dodge.
    Dodge,
    /// Strengthen the user.
    Buff,
    /// Make the target vulnerable.
    Debuff,
    /// Damage the target and heal the user for half.
    Special,
}

impl CardType {
    /// All card types.
    pub const ALL: [CardType; 6] = [
        CardType::Attack,
        CardType::Defense,
        CardType::Dodge,
        CardType::Buff,
        CardType::Debuff,
        CardType::Special,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Dodge => "Dodge",
            Self::Buff => "Buff",
            Self::Debuff => "Debuff",
            Self::Special => "Special",
        }
    }

    /// Whether the card's main effect lands on an enemy.
    #[must_use]
    pub const fn is_offensive(self) -> bool {
        matches!(self, Self::Attack | Self::Debuff | Self::Special)
    }
}

impl FromStr for CardType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let card_type = match s.trim().to_lowercase().as_str() {
            "attack" | "ataque" => Self::Attack,
            "defense" | "defence" | "defesa" => Self::Defense,
            "dodge" | "esquiva" => Self::Dodge,
            "buff" => Self::Buff,
            "debuff" => Self::Debuff,
            "special" | "especial" => Self::Special,
            _ => return Err(ConfigurationError::UnknownCardType(s.to_string())),
        };
        Ok(card_type)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cosmetic element tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Water,
    Air,
}

impl Element {
    /// All elements.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Water, Element::Air];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Water => "Water",
            Self::Air => "Air",
        }
    }
}

impl FromStr for Element {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let element = match s.trim().to_lowercase().as_str() {
            "fire" | "fogo" => Self::Fire,
            "earth" | "terra" => Self::Earth,
            "water" | "água" | "agua" => Self::Water,
            "air" | "ar" => Self::Air,
            _ => return Err(ConfigurationError::UnknownElement(s.to_string())),
        };
        Ok(element)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    Idle,
    Selected,
    Exhausted,
}

/// A playable card.
///
/// Invariants: `uses_remaining <= max_uses`, and the card is `Exhausted`
/// exactly when `uses_remaining == 0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    card_type: CardType,
    magnitude: i32,
    element: Element,
    energy_cost: i32,
    max_uses: u32,
    uses_remaining: u32,
    state: CardState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<(StatusKind, StatusParams)>,
}

impl Card {
    /// Create a card with default uses and energy cost.
    #[must_use]
    pub fn new(card_type: CardType, magnitude: i32, element: Element) -> Self {
        Self {
            card_type,
            magnitude,
            element,
            energy_cost: DEFAULT_ENERGY_COST,
            max_uses: DEFAULT_MAX_USES,
            uses_remaining: DEFAULT_MAX_USES,
            state: CardState::Idle,
            status: None,
        }
    }

    /// Build a card from type and element names.
    pub fn from_names(
        card_type: &str,
        magnitude: i32,
        element: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(card_type.parse()?, magnitude, element.parse()?))
    }

    /// Set the use budget (and refill it). Zero means the default.
    #[must_use]
    pub fn with_max_uses(mut self, max_uses: u32) -> Self {
        self.max_uses = if max_uses == 0 { DEFAULT_MAX_USES } else { max_uses };
        self.reset();
        self
    }

    /// Set the energy cost. Negative costs are treated as free.
    #[must_use]
    pub fn with_energy_cost(mut self, cost: i32) -> Self {
        self.energy_cost = cost.max(0);
        self
    }

    /// Attach a status payload by name.
    ///
    /// Fails with `UnknownStatus` if the name is not a known status or alias.
    pub fn with_status(self, name: &str, params: StatusParams) -> Result<Self, ConfigurationError> {
        let kind: StatusKind = name.parse()?;
        Ok(self.with_status_kind(kind, params))
    }

    /// Attach a status payload.
    #[must_use]
    pub fn with_status_kind(mut self, kind: StatusKind, params: StatusParams) -> Self {
        self.status = Some((kind, params));
        self
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    #[must_use]
    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    #[must_use]
    pub fn energy_cost(&self) -> i32 {
        self.energy_cost
    }

    #[must_use]
    pub fn max_uses(&self) -> u32 {
        self.max_uses
    }

    #[must_use]
    pub fn uses_remaining(&self) -> u32 {
        self.uses_remaining
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Optional status payload.
    #[must_use]
    pub fn status(&self) -> Option<(StatusKind, StatusParams)> {
        self.status
    }

    /// Whether the card has uses left.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.uses_remaining > 0
    }

    /// Whether `current_energy` covers the cost.
    #[must_use]
    pub fn requires_energy(&self, current_energy: i32) -> bool {
        current_energy >= self.energy_cost
    }

    /// Mark the card selected. Fails unless it is idle with uses left.
    pub(crate) fn select(&mut self) -> bool {
        if self.state != CardState::Idle || !self.is_active() {
            return false;
        }
        self.state = CardState::Selected;
        true
    }

    /// Return a selected card to idle.
    pub(crate) fn deselect(&mut self) -> bool {
        if self.state != CardState::Selected {
            return false;
        }
        self.state = CardState::Idle;
        true
    }

    /// Spend one use and, if `apply_effect`, resolve the effect.
    ///
    /// Returns `false` without touching anything if the card is exhausted.
    pub fn use_card(
        &mut self,
        user: &mut dyn Combatant,
        target: Option<&mut dyn Combatant>,
        ctx: &mut CombatContext<'_>,
        apply_effect: bool,
    ) -> bool {
        if !self.is_active() {
            debug!(card = %self.card_type, "card has no uses left");
            return false;
        }

        self.uses_remaining -= 1;
        self.state = if self.uses_remaining == 0 {
            CardState::Exhausted
        } else {
            CardState::Idle
        };

        if apply_effect {
            resolve_card(self, user, target, ctx);
        }
        true
    }

    /// Independent copy. Unless `keep_state`, the copy has full uses and is idle.
    #[must_use]
    pub fn clone_card(&self, keep_state: bool) -> Self {
        let mut copy = self.clone();
        if !keep_state {
            copy.reset();
        }
        copy
    }

    /// Restore full uses and idle state.
    pub fn reset(&mut self) {
        self.uses_remaining = self.max_uses;
        self.state = CardState::Idle;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {} | uses {}/{} | energy {}",
            self.card_type,
            self.element,
            self.magnitude,
            self.uses_remaining,
            self.max_uses,
            self.energy_cost
        )
    }
}
