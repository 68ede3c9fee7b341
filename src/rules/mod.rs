//! Game state and the battle-resolution rules engine.
//!
//! `GameState` owns both sides' zones, the round counter, the pause gate,
//! and the RNG. `BattleEngine` advances it one discrete step per call and
//! detects victory.

pub mod engine;
pub mod state;

pub use engine::{BattleEngine, StepOutcome};
pub use state::{GameState, SideZones};
