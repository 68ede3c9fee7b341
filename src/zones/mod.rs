//! Zones: the two card locations each side owns.
//!
//! ## Key Types
//!
//! - `Deck`: face-down draw pile, consumed from the front
//! - `Pile`: face-up staging area where contested cards accumulate
//!
//! Every card belongs to exactly one zone at all times; zones move cards,
//! they never create or drop them.

pub mod deck;
pub mod pile;

pub use deck::Deck;
pub use pile::Pile;
