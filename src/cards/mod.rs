//! Card system: cards, types, elements and deck generation.
//!
//! ## Key Types
//!
//! - `Card`: One playable action with a use budget
//! - `CardType`: What the card does (attack, defense, dodge, buff, debuff, special)
//! - `CardState`: Idle, selected or exhausted
//! - `Element`: Cosmetic tag
//! - `generate_deck`: Build a deck from a `DeckConfig`

pub mod card;
pub mod deck;

pub use card::{Card, CardState, CardType, Element, DEFAULT_ENERGY_COST, DEFAULT_MAX_USES};
pub use deck::generate_deck;
