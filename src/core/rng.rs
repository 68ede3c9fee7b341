//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffle sequence
//! - **Seedable by the caller**: replay any game from its seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use war_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = vec![1, 2, 3, 4, 5];
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for deck and pile shuffling.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the operating system.
    ///
    /// Fails when no entropy source is available. That failure is fatal to
    /// setup: a game cannot be dealt without randomness.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let mut seed_bytes = [0u8; 8];
        rand::rngs::OsRng
            .try_fill_bytes(&mut seed_bytes)
            .map_err(EntropyError)?;
        Ok(Self::new(u64::from_le_bytes(seed_bytes)))
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// The operating system provided no entropy at setup.
#[derive(Debug)]
pub struct EntropyError(rand::Error);

impl std::fmt::Display for EntropyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no entropy source available: {}", self.0)
    }
}

impl std::error::Error for EntropyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            let mut a: Vec<_> = (0..52).collect();
            let mut b: Vec<_> = (0..52).collect();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a: Vec<_> = (0..52).collect();
        let mut b: Vec<_> = (0..52).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_from_entropy() {
        let mut rng = GameRng::from_entropy().unwrap();
        // Just exercise the stream
        let mut data = vec![1, 2, 3, 4, 5];
        rng.shuffle(&mut data);
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..10 {
            let mut data: Vec<_> = (0..52).collect();
            rng.shuffle(&mut data);
        }

        // Save state
        let state = rng.state();

        // Continue generating
        let mut expected: Vec<_> = (0..52).collect();
        rng.shuffle(&mut expected);

        // Restore and verify
        let mut restored = GameRng::from_state(&state);
        let mut actual: Vec<_> = (0..52).collect();
        restored.shuffle(&mut actual);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
