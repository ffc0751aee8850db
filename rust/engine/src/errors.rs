use thiserror::Error;

/// Errors returned by the betting engine. All are recoverable: the hand
/// state is untouched and the caller is expected to re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("Hand is already over")]
    HandAlreadyOver,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Cannot check - must call or raise")]
    CannotCheck,
    #[error("Nothing to call")]
    NothingToCall,
    #[error("Cannot raise - raise limit reached or no chips left")]
    CannotRaise,
    #[error("Raise of {amount} is below the minimum of {minimum}")]
    RaiseTooSmall { amount: u32, minimum: u32 },
    #[error("Deck exhausted while dealing")]
    DeckExhausted,
}
