//! # war-engine
//!
//! A deterministic battle engine for the card game War.
//!
//! Two sides of 26 cards face off repeatedly: top cards are compared, the
//! higher rank takes both piles, and ties escalate through face-down "burn"
//! cards until one side holds all 52. The engine is the battle-resolution
//! state machine only; rendering, pacing, and input belong to a presentation
//! layer that reads the state this crate produces each tick.
//!
//! ## Design Principles
//!
//! 1. **Explicit identity**: sides are tagged with a [`Side`] enum and
//!    addressed through a [`SideMap`] — no pointer-identity branching.
//!
//! 2. **Deterministic**: all shuffling flows through a seedable [`GameRng`],
//!    so any game can be replayed exactly from its seed.
//!
//! 3. **Precondition checks over fault recovery**: running out of cards is
//!    detected with `can_deal` before any draw is attempted, never caught
//!    after the fact.
//!
//! ## Modules
//!
//! - `core`: side identity, RNG, pause gate
//! - `cards`: ranks, sprite references, the standard 52-card set
//! - `zones`: `Deck` (face-down draw pile) and `Pile` (face-up staging area)
//! - `rules`: `GameState` setup and the `BattleEngine` step function
//!
//! ## Usage
//!
//! ```
//! use war_engine::{BattleEngine, GameState};
//!
//! let mut state = GameState::new(Some(42)).unwrap();
//! let engine = BattleEngine::new(30);
//!
//! // One simulation tick.
//! if !state.pause_mut().tick() {
//!     engine.advance(&mut state);
//!     engine.check_victory(&mut state);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{EntropyError, GameRng, GameRngState, PauseGate, Side, SideMap};

pub use crate::cards::{standard_deck, Card, Rank, SpriteRef};

pub use crate::zones::{Deck, Pile};

pub use crate::rules::{BattleEngine, GameState, SideZones, StepOutcome};
