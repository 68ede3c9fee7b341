//! Card values and the standard deck.
//!
//! Ranks are ace-high: the pip value 1 is remapped to 14 at card-creation
//! time, and comparisons elsewhere are plain strict ordering on the stored
//! value. No suit ranking exists; suits only distinguish physical cards.

use serde::{Deserialize, Serialize};

/// Pips per suit in a standard deck.
pub const PIPS_PER_SUIT: u8 = 13;

/// Suits in a standard deck.
pub const SUITS: u8 = 4;

/// Total cards in a standard deck.
pub const DECK_SIZE: usize = (SUITS * PIPS_PER_SUIT) as usize;

/// Comparison value of a card, ace-high (2..=14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank.
    pub const TWO: Rank = Rank(2);
    /// Jack.
    pub const JACK: Rank = Rank(11);
    /// Queen.
    pub const QUEEN: Rank = Rank(12);
    /// King.
    pub const KING: Rank = Rank(13);
    /// Ace, remapped high.
    pub const ACE: Rank = Rank(14);

    /// Build a rank from a 1-based pip value (1..=13), remapping ace high.
    ///
    /// Panics on a pip outside 1..=13; pips only come from deck
    /// construction and tests.
    #[must_use]
    pub fn from_pip(pip: u8) -> Self {
        assert!((1..=PIPS_PER_SUIT).contains(&pip), "pip out of range: {pip}");
        if pip == 1 {
            Self::ACE
        } else {
            Self(pip)
        }
    }

    /// The raw comparison value (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "A"),
            n => write!(f, "{n}"),
        }
    }
}

/// Opaque display reference: a cell index on a 4x13 sprite sheet.
///
/// The core never interprets it beyond equality; because every physical
/// card gets a distinct cell, it also serves as card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpriteRef(u8);

impl SpriteRef {
    /// Build a sprite reference from a sheet row (suit) and column (pip - 1).
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < SUITS, "sprite row out of range: {row}");
        assert!(col < PIPS_PER_SUIT, "sprite column out of range: {col}");
        Self(row * PIPS_PER_SUIT + col)
    }

    /// Sheet row (0..=3).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / PIPS_PER_SUIT
    }

    /// Sheet column (0..=12).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % PIPS_PER_SUIT
    }
}

/// A playing card: immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Comparison value.
    pub rank: Rank,
    /// Display reference; also the card's identity.
    pub sprite: SpriteRef,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, sprite: SpriteRef) -> Self {
        Self { rank, sprite }
    }
}

/// Build the standard 52-card set: 4 suits x 13 pips, in sheet order.
///
/// Called once at setup; every later operation relocates these cards
/// without creating or destroying any.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for row in 0..SUITS {
        for col in 0..PIPS_PER_SUIT {
            cards.push(Card::new(Rank::from_pip(col + 1), SpriteRef::new(row, col)));
        }
    }
    cards
}
