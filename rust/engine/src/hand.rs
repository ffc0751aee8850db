use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Tracks which of the two seats has acted since the last bet-size change.
///
/// A raise opens a fresh sub-round, so the set is reset to just the raiser;
/// a showdown on check requires both seats present with equal bets.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActedSet {
    acted: [bool; 2],
}

impl ActedSet {
    pub fn insert(&mut self, seat: usize) {
        self.acted[seat] = true;
    }

    pub fn contains(&self, seat: usize) -> bool {
        self.acted[seat]
    }

    pub fn both_acted(&self) -> bool {
        self.acted[0] && self.acted[1]
    }

    pub fn clear(&mut self) {
        self.acted = [false; 2];
    }

    /// Reset to exactly one member. Used when a raise reopens the action.
    pub fn reset_to(&mut self, seat: usize) {
        self.acted = [false; 2];
        self.acted[seat] = true;
    }
}

/// Outcome of a resolved hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandWinner {
    /// The given seat took the pot (by fold or by higher rank).
    Seat(usize),
    /// Equal ranks; the pot was split.
    Tie,
}

/// All mutable state for one dealt hand. Indexed by seat (0 = seat A,
/// which always acts first; 1 = seat B).
///
/// Mid-hand invariants, maintained by [`crate::engine::Engine`]:
/// - `pot == bets[0] + bets[1]` until the pot is awarded
/// - `current_bet == max(bets)` after any bet-affecting action
/// - `raise_count[s] <= MAX_RAISES_PER_HAND`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    /// Chips committed by both seats this hand
    pub pot: u32,
    /// Highest single-seat cumulative bet this hand
    pub current_bet: u32,
    /// Each seat's cumulative contribution this hand
    pub bets: [u32; 2],
    /// Per-seat folded flags
    pub folded: [bool; 2],
    /// Raises taken by each seat this hand
    pub raise_count: [u8; 2],
    /// Increment (not total) of the most recent raise; 0 before any raise
    pub last_raise_amount: u32,
    /// One hidden card per seat, dealt without replacement
    pub cards: [Option<Card>; 2],
    /// Seat whose action is awaited; meaningless once the hand is over
    pub current_player: usize,
    /// Who has acted since the last bet-size change
    pub acted_this_round: ActedSet,
    pub hand_over: bool,
    pub winner: Option<HandWinner>,
    /// Monotonically increasing within a match
    pub hand_number: u32,
}

impl Hand {
    /// Amount the seat would need to add to match the current bet.
    pub fn call_amount(&self, seat: usize) -> u32 {
        self.current_bet.saturating_sub(self.bets[seat])
    }

    pub fn card(&self, seat: usize) -> Option<Card> {
        self.cards[seat]
    }

    /// Wipes per-hand state for a new deal, keeping the hand counter.
    pub(crate) fn reset_for_deal(&mut self) {
        self.pot = 0;
        self.current_bet = 0;
        self.bets = [0; 2];
        self.folded = [false; 2];
        self.raise_count = [0; 2];
        self.last_raise_amount = 0;
        self.cards = [None; 2];
        self.acted_this_round.clear();
        self.hand_over = false;
        self.winner = None;
    }
}
