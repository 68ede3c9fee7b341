//! The battle-resolution state machine.
//!
//! One `advance` call performs exactly one action, chosen by a
//! priority-ordered check on pile parity (even size = needs a face-down
//! deal, odd size = has a comparable face-up top card):
//!
//! 1. **Deal** — unless both piles have a face-up top, each side draws one
//!    card from its deck onto its pile. Does not count a round.
//! 2. **Compare** — both tops face up: strict rank comparison. A tie counts
//!    a round and immediately deals the face-down burn cards in the same
//!    call; a decisive win counts a round and moves both piles, shuffled,
//!    to the back of the winner's deck.
//! 3. **Depletion recovery** — any action that needs a deal first checks
//!    that both decks can provide a card. If either cannot, each side's
//!    pile cards return to that side's own deck (shuffled whole) and the
//!    call is consumed.
//!
//! Victory is a separate query: a side has lost once its deck and pile are
//! both empty. Callers run `check_victory` after every `advance`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::Side;
use crate::rules::state::GameState;

/// What a single `advance` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Each side dealt one card onto its pile.
    Dealt,
    /// Top cards matched; the round was counted and burn cards dealt.
    Tied {
        /// The matching rank.
        rank: Rank,
    },
    /// One side took both piles.
    Won {
        /// The side that took the cards.
        side: Side,
        /// Winning rank.
        high: Rank,
        /// Losing rank.
        low: Rank,
    },
    /// A deck ran dry; pile cards went back to their owners' decks.
    Recovered,
    /// The game is already over; nothing happened.
    Finished,
}

/// Executes one battle step per call against a [`GameState`].
///
/// Stateless apart from its pause configuration, so one engine can drive
/// any number of games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEngine {
    pause_ticks: u32,
}

impl BattleEngine {
    /// Create an engine that arms the pause gate with `pause_ticks` after
    /// every effective step.
    #[must_use]
    pub fn new(pause_ticks: u32) -> Self {
        Self { pause_ticks }
    }

    /// Perform one battle step.
    ///
    /// Terminal states are frozen: once a winner is set this returns
    /// [`StepOutcome::Finished`] without touching the state.
    pub fn advance(&self, state: &mut GameState) -> StepOutcome {
        if state.winner.is_some() {
            return StepOutcome::Finished;
        }

        let outcome = Self::step(state);
        state.pause.arm(self.pause_ticks);
        outcome
    }

    /// Check whether either side has run out of cards entirely.
    ///
    /// Sets `state.winner` (freezing the state) and returns it. Must be
    /// called after every `advance`, since any step can be the one that
    /// empties a side.
    pub fn check_victory(&self, state: &mut GameState) -> Option<Side> {
        if state.winner.is_none() {
            for side in Side::BOTH {
                if state.sides[side].is_depleted() {
                    state.winner = Some(side.opponent());
                }
            }
        }
        state.winner
    }

    fn step(state: &mut GameState) -> StepOutcome {
        let comparable = Side::BOTH.iter().all(|&s| state.sides[s].pile.has_face_up());

        if !comparable {
            if !Self::can_deal(state) {
                Self::recover(state);
                return StepOutcome::Recovered;
            }
            Self::deal(state);
            return StepOutcome::Dealt;
        }

        let rank_a = Self::top_rank(state, Side::A);
        let rank_b = Self::top_rank(state, Side::B);

        match rank_a.cmp(&rank_b) {
            Ordering::Equal => {
                // Fused tie+deal: the burn cards land face down so the
                // next call compares the escalated tops.
                if !Self::can_deal(state) {
                    Self::recover(state);
                    return StepOutcome::Recovered;
                }
                state.rounds += 1;
                Self::deal(state);
                StepOutcome::Tied { rank: rank_a }
            }
            ordering => {
                let side = match ordering {
                    Ordering::Greater => Side::A,
                    _ => Side::B,
                };
                state.rounds += 1;

                let mut spoils = state.sides[Side::A].pile.take_all();
                spoils.extend(state.sides[Side::B].pile.take_all());
                state.rng.shuffle(&mut spoils);
                state.sides[side].deck.extend(spoils);

                StepOutcome::Won {
                    side,
                    high: rank_a.max(rank_b),
                    low: rank_a.min(rank_b),
                }
            }
        }
    }

    /// Explicit precondition for any action that deals a card per side.
    fn can_deal(state: &GameState) -> bool {
        Side::BOTH.iter().all(|&s| !state.sides[s].deck.is_empty())
    }

    fn deal(state: &mut GameState) {
        for side in Side::BOTH {
            let zones = state.sides.get_mut(side);
            match zones.deck.draw() {
                Some(card) => zones.pile.push(card),
                // can_deal is checked on every path that reaches here
                None => panic!("deal from empty deck on {side}"),
            }
        }
    }

    /// Return each side's pile cards to that side's own deck and shuffle
    /// the recovered decks whole. Preserves 52-card conservation when a
    /// deck runs dry mid-war.
    fn recover(state: &mut GameState) {
        for side in Side::BOTH {
            let zones = state.sides.get_mut(side);
            let staged = zones.pile.take_all();
            zones.deck.extend(staged);
            zones.deck.shuffle(&mut state.rng);
        }
    }

    fn top_rank(state: &GameState, side: Side) -> Rank {
        match state.sides[side].pile.top() {
            Some(card) => card.rank,
            // Unreachable while pile parity is intact; reaching it means
            // the card-conservation or parity invariant is broken.
            None => panic!("{side} pile marked face-up but empty"),
        }
    }
}
