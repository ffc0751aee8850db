use blindside_engine::errors::GameError;
use thiserror::Error;

/// Errors surfaced by the room layer. All are recoverable and reported to
/// the caller; none abort the process or leave partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),
    #[error("Room code already in use: {0}")]
    CodeTaken(String),
    #[error("Room is full")]
    RoomFull,
    #[error("Need two seated participants")]
    NotEnoughPlayers,
    #[error("Participant {0} is not seated in this room")]
    UnknownParticipant(String),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Room storage poisoned")]
    StoragePoisoned,
}
