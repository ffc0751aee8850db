use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::{PlayerAction as A, MAX_RAISES_PER_HAND};

/// A player action with its chip movement fully resolved against the hand
/// and the actor's stack. All-in truncation has already been applied, so
/// applying a `ValidatedAction` can never overdraw a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to move to match the current bet; may be short of the nominal
    /// call when the stack ran out (all-in call).
    Call(u32),
    /// `total` chips move (call portion plus increment); `increment` is the
    /// effective raise, which an all-in may shrink below the nominal minimum.
    Raise { total: u32, increment: u32 },
}

/// True when the seat's cumulative bet already matches the current bet.
pub fn can_check(hand: &Hand, seat: usize) -> bool {
    hand.bets[seat] == hand.current_bet
}

/// True when the seat has raises left this hand and any chips to raise with.
pub fn can_raise(hand: &Hand, stack: u32, seat: usize) -> bool {
    hand.raise_count[seat] < MAX_RAISES_PER_HAND && stack > 0
}

/// Minimum legal raise increment: 1 before any raise this hand, afterwards
/// double the previous increment (strict doubling escalation).
pub fn min_raise(hand: &Hand) -> u32 {
    if hand.last_raise_amount == 0 {
        1
    } else {
        hand.last_raise_amount * 2
    }
}

/// Validates an action for the given seat against betting rules and stack
/// size, without mutating anything.
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - the seat is facing an unmatched bet
/// - [`GameError::NothingToCall`] - call with no outstanding bet to match
/// - [`GameError::CannotRaise`] - raise limit reached or empty stack
/// - [`GameError::RaiseTooSmall`] - increment below the doubling minimum
pub fn validate_action(
    hand: &Hand,
    stack: u32,
    seat: usize,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if can_check(hand, seat) {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck)
            }
        }
        A::Call => {
            let call = hand.call_amount(seat);
            if call == 0 {
                return Err(GameError::NothingToCall);
            }
            Ok(ValidatedAction::Call(call.min(stack)))
        }
        A::Raise(amount) => {
            if !can_raise(hand, stack, seat) {
                return Err(GameError::CannotRaise);
            }
            let minimum = min_raise(hand);
            if amount < minimum {
                return Err(GameError::RaiseTooSmall { amount, minimum });
            }
            let call = hand.call_amount(seat);
            let nominal = call.saturating_add(amount);
            if nominal >= stack {
                // All-in: the effective increment shrinks to whatever is
                // left after the call portion, possibly to zero.
                Ok(ValidatedAction::Raise {
                    total: stack,
                    increment: stack.saturating_sub(call),
                })
            } else {
                Ok(ValidatedAction::Raise {
                    total: nominal,
                    increment: amount,
                })
            }
        }
    }
}
