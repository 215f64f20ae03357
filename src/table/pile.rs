//! An ordered, owned collection of cards.
//!
//! A `Pile` exclusively owns its cards: moving a card between piles is a
//! `draw` (which yields owned cards) followed by an `add` (which consumes
//! them). The top of a pile is the last element.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::PileId;
use crate::cards::Card;
use crate::core::GameRng;

/// Buffer for cards in flight between piles.
///
/// Transfers move one or two cards in the common case (a play, a deal, a
/// foundation drain), so the inline capacity covers nearly every draw.
pub type DrawnCards = SmallVec<[Card; 2]>;

/// An ordered pile of cards with a fixed role on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile for the given role.
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    /// This pile's role on the table.
    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// Append cards to the top, taking ownership.
    ///
    /// The caller guarantees the cards are not owned by any other pile;
    /// `Table::transfer` upholds this by feeding `draw` results straight
    /// into `add`.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the top `amount` cards, in bottom-to-top order.
    ///
    /// `amount` is clamped to `[1, len]`; drawing from an empty pile
    /// returns an empty buffer. Never panics, by contract.
    pub fn draw(&mut self, amount: usize) -> DrawnCards {
        if self.cards.is_empty() {
            return DrawnCards::new();
        }
        let amount = amount.clamp(1, self.cards.len());
        self.cards.split_off(self.cards.len() - amount).into_iter().collect()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the top card, for face flips.
    pub fn top_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// In-place random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Empty the pile without transferring ownership.
    ///
    /// Only used during a new-game reset, where every card is rebuilt and
    /// reassigned to the stock immediately after.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
