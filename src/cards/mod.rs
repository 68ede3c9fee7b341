//! Card data: ranks, sprite references, and the standard 52-card set.
//!
//! ## Key Types
//!
//! - `Rank`: comparison value, ace-high (2..=14)
//! - `SpriteRef`: opaque display reference, unique per physical card
//! - `Card`: immutable rank + sprite pair
//!
//! Cards are created exactly once at setup by [`standard_deck`] and only
//! relocated between zones afterwards.

pub mod card;

pub use card::{standard_deck, Card, Rank, SpriteRef, DECK_SIZE, PIPS_PER_SUIT, SUITS};
