//! The player combatant and its card economy.
//!
//! The player owns a face-down deck (top is the end of the vector), a hand,
//! a discard pile and an ordered selection of hand indices. Energy is
//! reserved when a card is selected, refunded when it is deselected, and
//! simply stays spent when the selection is played.
//!
//! Any operation that removes cards from the hand clears the selection
//! first, so selected indices always point into the current hand.
//!
//! ## Usage
//!
//! ```
//! use card_battle::cards::{Card, CardType, Element};
//! use card_battle::combatant::Player;
//! use card_battle::core::{GameRng, PlayerConfig};
//!
//! let mut rng = GameRng::new(42);
//! let mut player = Player::new(&PlayerConfig::default());
//! player.set_deck(&vec![Card::new(CardType::Attack, 10, Element::Fire); 4], &mut rng);
//! player.draw_card(2, &mut rng);
//!
//! assert!(player.select_card_by_index(0));
//! assert_eq!(player.energy(), 2);
//! player.reset_selection();
//! assert_eq!(player.energy(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::stats::CombatStats;
use super::{reborrow, Combatant};
use crate::cards::{Card, CardState};
use crate::combat::CombatContext;
use crate::core::{CombatantId, GameRng, PlayerConfig};

/// The player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stats: CombatStats,
    energy: i32,
    max_energy: i32,
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
    selected: SmallVec<[usize; 4]>,
}

impl Player {
    /// Create a full-health, full-energy player with no cards.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        let max_energy = config.max_energy.max(0);
        Self {
            name: config.name.clone(),
            stats: CombatStats::new(config.max_health),
            energy: max_energy,
            max_energy,
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            selected: SmallVec::new(),
        }
    }

    // === Energy ===

    #[must_use]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    #[must_use]
    pub fn max_energy(&self) -> i32 {
        self.max_energy
    }

    /// Refill energy to max.
    pub fn reset_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Gain energy, capped at max.
    pub fn gain_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_add(amount.max(0)).min(self.max_energy);
    }

    /// Lose energy, floored at zero.
    pub fn lose_energy(&mut self, amount: i32) {
        self.energy = (self.energy - amount.max(0)).max(0);
    }

    /// Add shield.
    pub fn add_shield(&mut self, amount: i32) {
        self.stats.add_shield(amount);
    }

    // === Cards ===

    /// Face-down deck; the last card is drawn next.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Selected hand indices, in selection order.
    #[must_use]
    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    /// Selected cards, in selection order.
    pub fn selected_cards(&self) -> impl Iterator<Item = &Card> {
        self.selected.iter().filter_map(|&i| self.hand.get(i))
    }

    /// Replace the deck with fresh clones of `cards`, shuffled. Clears hand,
    /// discard and selection.
    pub fn set_deck(&mut self, cards: &[Card], rng: &mut GameRng) {
        self.reset_selection();
        self.deck = cards.iter().map(|c| c.clone_card(false)).collect();
        rng.shuffle(&mut self.deck);
        self.hand.clear();
        self.discard.clear();
    }

    /// Whether the card has uses left and the player can pay for it.
    #[must_use]
    pub fn can_play_card(&self, card: &Card) -> bool {
        card.is_active() && card.requires_energy(self.energy)
    }

    /// Select the hand card at `index`, reserving its energy.
    ///
    /// Fails without changing anything if the index is out of range, the
    /// card is already selected or exhausted, or energy is short.
    pub fn select_card_by_index(&mut self, index: usize) -> bool {
        let energy = self.energy;
        let Some(card) = self.hand.get_mut(index) else {
            debug!(index, "select rejected: no such card");
            return false;
        };
        if !card.requires_energy(energy) {
            debug!(index, energy, cost = card.energy_cost(), "select rejected: energy");
            return false;
        }
        if !card.select() {
            debug!(index, state = ?card.state(), "select rejected: card not idle");
            return false;
        }

        let cost = card.energy_cost();
        self.lose_energy(cost);
        self.selected.push(index);
        true
    }

    /// Deselect the hand card at `index`, refunding its energy.
    pub fn deselect_card_by_index(&mut self, index: usize) -> bool {
        let Some(pos) = self.selected.iter().position(|&i| i == index) else {
            return false;
        };
        self.selected.remove(pos);
        self.release(index);
        true
    }

    /// Deselect the most recently selected card, refunding its energy.
    pub fn deselect_card(&mut self) -> bool {
        match self.selected.pop() {
            Some(index) => {
                self.release(index);
                true
            }
            None => false,
        }
    }

    /// Deselect everything, refunding all reserved energy.
    pub fn reset_selection(&mut self) {
        while self.deselect_card() {}
    }

    fn release(&mut self, index: usize) {
        if let Some(card) = self.hand.get_mut(index) {
            if card.deselect() {
                let cost = card.energy_cost();
                self.gain_energy(cost);
            }
        }
    }

    /// Play every selected card, in selection order, against `target`.
    ///
    /// Each card spends a use, resolves its effect and moves to the
    /// discard pile. Energy stays spent. Returns the number of cards played.
    pub fn use_selected_cards(
        &mut self,
        mut target: Option<&mut dyn Combatant>,
        ctx: &mut CombatContext<'_>,
    ) -> usize {
        let order = std::mem::take(&mut self.selected);

        let mut descending: SmallVec<[usize; 4]> = order.clone();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        descending.dedup();
        let mut taken: SmallVec<[(usize, Card); 4]> = SmallVec::new();
        for index in descending {
            if index < self.hand.len() {
                taken.push((index, self.hand.remove(index)));
            }
        }

        let mut played = 0;
        for index in order {
            let Some(pos) = taken.iter().position(|(i, _)| *i == index) else {
                continue;
            };
            let (_, mut card) = taken.remove(pos);
            card.use_card(self, reborrow(&mut target), ctx, true);
            self.discard.push(card);
            played += 1;
        }
        played
    }

    /// Select and immediately resolve the hand card at `index`.
    ///
    /// The existing selection is replaced; if the card cannot be selected
    /// nothing changes.
    pub fn play_card(
        &mut self,
        index: usize,
        target: Option<&mut dyn Combatant>,
        ctx: &mut CombatContext<'_>,
    ) -> bool {
        if !self.select_only(index) {
            return false;
        }
        self.use_selected_cards(target, ctx) == 1
    }

    /// Replace the selection with just the hand card at `index`.
    ///
    /// The current selection is refunded first, so its energy counts
    /// towards the new card. On failure the previous selection is kept.
    pub fn select_only(&mut self, index: usize) -> bool {
        let previous = self.selected.clone();
        self.reset_selection();
        if self.select_card_by_index(index) {
            return true;
        }
        self.restore_selection(&previous);
        false
    }

    /// Reselect `indices` in order after the selection was cleared.
    pub(crate) fn restore_selection(&mut self, indices: &[usize]) {
        self.reset_selection();
        for &index in indices {
            if !self.select_card_by_index(index) {
                debug!(index, "selection could not be restored");
            }
        }
    }

    /// Draw up to `count` cards, recycling the discard pile when the deck
    /// runs out. Returns how many were drawn.
    pub fn draw_card(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            if self.deck.is_empty() {
                self.reshuffle_discard_into_deck(rng);
            }
            let Some(card) = self.deck.pop() else {
                debug!(drawn, requested = count, "deck and discard exhausted");
                break;
            };
            self.hand.push(card);
            drawn += 1;
        }
        drawn
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.reset_selection();
        self.discard.append(&mut self.hand);
    }

    /// Replace the deck with fresh clones of the discard pile, shuffled.
    pub fn reshuffle_discard_into_deck(&mut self, rng: &mut GameRng) {
        if self.discard.is_empty() {
            return;
        }
        self.deck = self.discard.drain(..).map(|c| c.clone_card(false)).collect();
        rng.shuffle(&mut self.deck);
        debug!(cards = self.deck.len(), "discard reshuffled into deck");
    }

    /// Mulligan: discard the hand and draw the same number back for `cost`
    /// energy.
    ///
    /// Fails without changing anything if the hand is empty or energy is
    /// short.
    pub fn reshuffle_hand(&mut self, cost: i32, rng: &mut GameRng) -> bool {
        if self.energy < cost {
            debug!(energy = self.energy, cost, "reshuffle rejected: energy");
            return false;
        }
        let count = self.hand.len();
        if count == 0 {
            debug!("reshuffle rejected: empty hand");
            return false;
        }

        self.reset_selection();
        self.lose_energy(cost);
        self.discard_hand();
        if self.deck.is_empty() {
            self.reshuffle_discard_into_deck(rng);
        }
        self.draw_card(count, rng);
        true
    }

    /// Restore every owned card to full uses, for a new encounter.
    pub fn reset_cards(&mut self) {
        self.reset_selection();
        for card in self.deck.iter_mut().chain(&mut self.hand).chain(&mut self.discard) {
            card.reset();
        }
    }

    /// Number of hand cards currently in `state`.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.hand.iter().filter(|c| c.state() == state).count()
    }
}

impl Combatant for Player {
    fn id(&self) -> CombatantId {
        CombatantId::Player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}
