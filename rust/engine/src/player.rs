use serde::{Deserialize, Serialize};

/// Chips each seat starts a match with.
pub const STARTING_STACK: u32 = 100;

/// Forced contribution posted by each seat at the start of every hand.
pub const ANTE: u32 = 1;

/// Each seat may raise at most this many times per hand.
pub const MAX_RAISES_PER_HAND: u8 = 2;

/// Seat index of the first actor. Seat A acts first every hand; there is
/// no dealer rotation in this game.
pub const FIRST_ACTOR: usize = 0;

/// A betting action as requested by a participant. `Raise` carries the
/// requested increment over the current bet, not the total.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only legal when the seat's bet already matches the current bet)
    Check,
    /// Match the current bet; always ends the hand in a showdown
    Call,
    /// Raise the current bet by the given increment
    Raise(u32),
}

/// The opposite seat index in a two-seat game.
pub fn other(seat: usize) -> usize {
    1 - seat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_seat_flips() {
        assert_eq!(other(0), 1);
        assert_eq!(other(1), 0);
    }

    #[test]
    fn actions_round_trip_through_json() {
        let raise = PlayerAction::Raise(5);
        let json = serde_json::to_string(&raise).unwrap();
        assert_eq!(serde_json::from_str::<PlayerAction>(&json).unwrap(), raise);

        let fold = serde_json::to_string(&PlayerAction::Fold).unwrap();
        assert_eq!(
            serde_json::from_str::<PlayerAction>(&fold).unwrap(),
            PlayerAction::Fold
        );
    }
}
