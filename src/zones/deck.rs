//! A side's face-down draw pile.
//!
//! Cards leave from the front and won battles or recovered pile cards are
//! appended at the back, so freshly won cards surface last.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::cards::Card;
use crate::core::GameRng;

/// Face-down draw pile, consumed from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards in draw order (front first).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card.
    ///
    /// `None` on an empty deck; the caller routes that to depletion
    /// recovery rather than treating it as an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append cards at the back, preserving their order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Shuffle the whole deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
