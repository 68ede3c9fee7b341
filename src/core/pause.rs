//! Tick countdown used to throttle battle steps.
//!
//! The engine arms the gate after every effective step; the caller's loop
//! polls `tick()` once per frame and skips simulation while it returns
//! `true`. Purely a rate limiter, it carries no game logic.

use serde::{Deserialize, Serialize};

/// Countdown gate spacing out battle steps for visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseGate {
    remaining: u32,
}

impl PauseGate {
    /// Create an unarmed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remaining-tick countdown.
    pub fn arm(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Consume one tick.
    ///
    /// Returns `true` while the countdown is running (the caller should
    /// skip simulation this tick), `false` once it has expired.
    pub fn tick(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Ticks left before the gate opens.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_gate_is_open() {
        let mut gate = PauseGate::new();
        assert!(!gate.tick());
        assert_eq!(gate.remaining(), 0);
    }

    #[test]
    fn test_countdown() {
        let mut gate = PauseGate::new();
        gate.arm(3);

        assert!(gate.tick());
        assert!(gate.tick());
        assert!(gate.tick());
        assert!(!gate.tick());
        assert_eq!(gate.remaining(), 0);
    }

    #[test]
    fn test_rearm_resets_countdown() {
        let mut gate = PauseGate::new();
        gate.arm(5);
        assert!(gate.tick());

        gate.arm(1);
        assert_eq!(gate.remaining(), 1);
        assert!(gate.tick());
        assert!(!gate.tick());
    }
}
