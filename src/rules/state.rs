//! Complete game state and setup.
//!
//! ## GameState
//!
//! - Both sides' deck and pile, addressed by `Side`
//! - Round counter (resolved comparisons only)
//! - Winner, once victory is detected
//! - Pause gate and RNG
//!
//! Mutated in place by `BattleEngine` until a winner is set; read-only
//! afterwards. The presentation layer only uses the accessors here.

use crate::cards::{standard_deck, Card, DECK_SIZE};
use crate::core::{EntropyError, GameRng, PauseGate, Side, SideMap};
use crate::zones::{Deck, Pile};

/// One side's two zones.
#[derive(Clone, Debug, Default)]
pub struct SideZones {
    /// Face-down draw pile.
    pub deck: Deck,
    /// Face-up staging area.
    pub pile: Pile,
}

impl SideZones {
    /// Total cards this side holds across both zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.pile.len()
    }

    /// A side has lost once it holds no cards at all.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.deck.is_empty() && self.pile.is_empty()
    }
}

/// Complete state of one game of War.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) sides: SideMap<SideZones>,
    pub(crate) rounds: u32,
    pub(crate) winner: Option<Side>,
    pub(crate) pause: PauseGate,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Deal a fresh game.
    ///
    /// Builds the 52-card set, shuffles it, and deals the first half to
    /// side A's deck and the second half to side B's. Piles start empty,
    /// `rounds` at 0, no winner.
    ///
    /// With `seed: None` the RNG is seeded from the operating system;
    /// failure to obtain entropy is fatal and surfaces here.
    pub fn new(seed: Option<u64>) -> Result<Self, EntropyError> {
        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy()?,
        };
        Ok(Self::deal(rng))
    }

    fn deal(mut rng: GameRng) -> Self {
        let mut cards = standard_deck();
        rng.shuffle(&mut cards);

        let second_half = cards.split_off(DECK_SIZE / 2);
        let sides = SideMap::new(|side| SideZones {
            deck: match side {
                Side::A => Deck::from_cards(cards.iter().copied()),
                Side::B => Deck::from_cards(second_half.iter().copied()),
            },
            pile: Pile::new(),
        });

        Self {
            sides,
            rounds: 0,
            winner: None,
            pause: PauseGate::new(),
            rng,
        }
    }

    /// Number of cards left in a side's deck.
    #[must_use]
    pub fn deck_len(&self, side: Side) -> usize {
        self.sides[side].deck.len()
    }

    /// Iterate a side's deck in draw order.
    pub fn deck_cards(&self, side: Side) -> impl Iterator<Item = &Card> {
        self.sides[side].deck.iter()
    }

    /// A side's pile contents, bottom first; the last card is the face-up
    /// one when the pile has odd size.
    #[must_use]
    pub fn pile(&self, side: Side) -> &[Card] {
        self.sides[side].pile.cards()
    }

    /// Resolved comparisons so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The winning side, once victory has been detected.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Read access to the pause gate.
    #[must_use]
    pub fn pause(&self) -> &PauseGate {
        &self.pause
    }

    /// Mutable access to the pause gate, for the caller's tick loop.
    pub fn pause_mut(&mut self) -> &mut PauseGate {
        &mut self.pause
    }

    /// Total cards across all four zones. Always 52.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Side::BOTH.iter().map(|&s| self.sides[s].total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_deal() {
        let state = GameState::new(Some(42)).unwrap();

        assert_eq!(state.deck_len(Side::A), 26);
        assert_eq!(state.deck_len(Side::B), 26);
        assert!(state.pile(Side::A).is_empty());
        assert!(state.pile(Side::B).is_empty());
        assert_eq!(state.rounds(), 0);
        assert_eq!(state.winner(), None);
        assert_eq!(state.pause().remaining(), 0);
        assert_eq!(state.total_cards(), DECK_SIZE);
    }

    #[test]
    fn test_deal_covers_whole_deck() {
        let state = GameState::new(Some(7)).unwrap();

        let sprites: HashSet<_> = Side::BOTH
            .iter()
            .flat_map(|&s| state.deck_cards(s).map(|c| c.sprite))
            .collect();

        assert_eq!(sprites.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_is_deterministic_by_seed() {
        let a = GameState::new(Some(99)).unwrap();
        let b = GameState::new(Some(99)).unwrap();

        for side in Side::BOTH {
            let cards_a: Vec<_> = a.deck_cards(side).copied().collect();
            let cards_b: Vec<_> = b.deck_cards(side).copied().collect();
            assert_eq!(cards_a, cards_b);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = GameState::new(Some(1)).unwrap();
        let b = GameState::new(Some(2)).unwrap();

        let cards_a: Vec<_> = a.deck_cards(Side::A).copied().collect();
        let cards_b: Vec<_> = b.deck_cards(Side::A).copied().collect();
        assert_ne!(cards_a, cards_b);
    }

    #[test]
    fn test_os_seeded_deal() {
        let state = GameState::new(None).unwrap();
        assert_eq!(state.total_cards(), DECK_SIZE);
    }
}
