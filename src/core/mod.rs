//! Core engine types: side identity, RNG, pause gate.
//!
//! These are the building blocks the rules engine is assembled from and
//! carry no game rules of their own.

pub mod pause;
pub mod rng;
pub mod side;

pub use pause::PauseGate;
pub use rng::{EntropyError, GameRng, GameRngState};
pub use side::{Side, SideMap};
