//! Deck generation.
//!
//! Expands a `DeckConfig` composition into concrete cards: the type list is
//! shuffled, each card's magnitude is rolled uniformly in its type's range,
//! and elements follow the thematic element (dodge cards are always Air).

use tracing::debug;

use super::card::{Card, CardType, Element};
use crate::core::{ConfigurationError, DeckConfig, GameRng};

/// Generate a deck from a configuration.
///
/// With `thematic` set, every non-dodge card gets that element; otherwise
/// each one rolls an element at random.
///
/// ```
/// use card_battle::cards::{generate_deck, CardType, Element};
/// use card_battle::core::{DeckConfig, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let deck = generate_deck(&DeckConfig::default(), Some(Element::Water), &mut rng).unwrap();
///
/// assert_eq!(deck.len(), 7);
/// assert_eq!(deck.iter().filter(|c| c.card_type() == CardType::Attack).count(), 5);
/// assert!(deck.iter().all(|c| c.element() == Element::Water));
/// ```
pub fn generate_deck(
    config: &DeckConfig,
    thematic: Option<Element>,
    rng: &mut GameRng,
) -> Result<Vec<Card>, ConfigurationError> {
    config.validate()?;

    let mut types: Vec<CardType> = config
        .composition
        .iter()
        .flat_map(|&(card_type, count)| std::iter::repeat(card_type).take(count))
        .collect();
    rng.shuffle(&mut types);

    let mut deck = Vec::with_capacity(types.len());
    for card_type in types {
        let range = config
            .range_for(card_type)
            .ok_or_else(|| ConfigurationError::MissingValueRange(card_type.to_string()))?;
        let magnitude = rng.gen_range_inclusive(range.min..=range.max);

        let element = if card_type == CardType::Dodge {
            Element::Air
        } else {
            match thematic {
                Some(element) => element,
                None => rng.choose(&Element::ALL).copied().unwrap_or(Element::Fire),
            }
        };

        let card = Card::new(card_type, magnitude, element)
            .with_max_uses(config.default_max_uses)
            .with_energy_cost(config.default_energy_cost);
        debug!(%card, "generated card");
        deck.push(card);
    }

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueRange;

    #[test]
    fn test_default_composition() {
        let mut rng = GameRng::new(3);
        let deck = generate_deck(&DeckConfig::default(), None, &mut rng).unwrap();

        assert_eq!(deck.len(), 7);
        let attacks: Vec<_> = deck
            .iter()
            .filter(|c| c.card_type() == CardType::Attack)
            .collect();
        assert_eq!(attacks.len(), 5);
        assert!(attacks.iter().all(|c| (10..=15).contains(&c.magnitude())));

        let defenses: Vec<_> = deck
            .iter()
            .filter(|c| c.card_type() == CardType::Defense)
            .collect();
        assert_eq!(defenses.len(), 2);
        assert!(defenses.iter().all(|c| (1..=2).contains(&c.magnitude())));
    }

    #[test]
    fn test_dodge_cards_are_air() {
        let config = DeckConfig::empty().with_cards(CardType::Dodge, 3, ValueRange::new(0, 1));
        let mut rng = GameRng::new(9);
        let deck = generate_deck(&config, Some(Element::Fire), &mut rng).unwrap();

        assert_eq!(deck.len(), 3);
        assert!(deck.iter().all(|c| c.element() == Element::Air));
    }

    #[test]
    fn test_config_defaults_applied() {
        let config = DeckConfig::empty()
            .with_cards(CardType::Attack, 2, ValueRange::new(5, 5))
            .with_max_uses(2)
            .with_energy_cost(0);
        let mut rng = GameRng::new(1);
        let deck = generate_deck(&config, None, &mut rng).unwrap();

        assert!(deck.iter().all(|c| c.max_uses() == 2 && c.energy_cost() == 0));
        assert!(deck.iter().all(|c| c.magnitude() == 5));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let config = DeckConfig::default();
        let a = generate_deck(&config, None, &mut GameRng::new(77)).unwrap();
        let b = generate_deck(&config, None, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_range_fails() {
        let config = DeckConfig::empty().with_cards(CardType::Attack, 1, ValueRange::new(5, 2));
        let mut rng = GameRng::new(1);

        assert!(matches!(
            generate_deck(&config, None, &mut rng),
            Err(ConfigurationError::InvalidValueRange { .. })
        ));
    }

    #[test]
    fn test_missing_range_fails() {
        let mut config = DeckConfig::empty();
        config.composition.push((CardType::Special, 1));
        let mut rng = GameRng::new(1);

        assert_eq!(
            generate_deck(&config, None, &mut rng),
            Err(ConfigurationError::MissingValueRange("Special".into()))
        );
    }
}
