//! A side's face-up staging area.
//!
//! Contested cards accumulate here during a compare/tie sequence. Pile
//! parity encodes presentation: an odd-sized pile shows its last card face
//! up (the actively compared card), an even-sized pile ends in a face-down
//! burn card.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Face-up staging area where contested cards accumulate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile with the given cards already staged (bottom first).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Stage a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Empty the pile, returning all cards bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Number of staged cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the top card is face up and comparable (odd size).
    #[must_use]
    pub fn has_face_up(&self) -> bool {
        self.cards.len() % 2 == 1
    }

    /// All staged cards in order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, SpriteRef};

    fn card(pip: u8) -> Card {
        Card::new(Rank::from_pip(pip), SpriteRef::new(1, pip - 1))
    }

    #[test]
    fn test_push_and_top() {
        let mut pile = Pile::new();
        assert_eq!(pile.top(), None);

        pile.push(card(4));
        pile.push(card(9));

        assert_eq!(pile.top(), Some(&card(9)));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_take_all_empties_pile() {
        let mut pile = Pile::from_cards([card(2), card(3), card(4)]);

        let taken = pile.take_all();

        assert_eq!(taken, vec![card(2), card(3), card(4)]);
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
    }

    #[test]
    fn test_face_up_parity() {
        let mut pile = Pile::new();
        assert!(!pile.has_face_up()); // empty: needs a deal

        pile.push(card(5));
        assert!(pile.has_face_up()); // one face-up card

        pile.push(card(6));
        assert!(!pile.has_face_up()); // tie burn card on top

        pile.push(card(7));
        assert!(pile.has_face_up());
    }
}
