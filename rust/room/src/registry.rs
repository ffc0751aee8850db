use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use blindside_engine::errors::GameError;
use blindside_engine::player::PlayerAction;

use crate::errors::RoomError;
use crate::room::Room;
use crate::view::{StateView, WinnerInfo};

/// Result of asking for the next hand: either it was dealt, or the match
/// is already decided and can only be reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextHand {
    Dealt,
    MatchOver(WinnerInfo),
}

/// Explicitly owned registry of live rooms.
///
/// The host constructs one and injects it wherever rooms are needed; there
/// is no process-wide ambient map. Room codes are supplied by the caller
/// (code generation belongs to the collaborator that owns session
/// identity). Rooms themselves serialize their own mutation, so the
/// registry only needs a read-mostly map.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: RwLock<HashMap<String, Arc<Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an empty room under the given code.
    pub fn create_room(&self, code: impl Into<String>) -> Result<Arc<Room>, RoomError> {
        let code = code.into();
        let mut rooms = self.rooms.write().map_err(|_| RoomError::StoragePoisoned)?;
        if rooms.contains_key(&code) {
            return Err(RoomError::CodeTaken(code));
        }

        tracing::info!(room = %code, "room created");
        let room = Arc::new(Room::new(code.clone()));
        rooms.insert(code, Arc::clone(&room));
        Ok(room)
    }

    #[doc(hidden)]
    pub fn create_room_with_seed(
        &self,
        code: impl Into<String>,
        seed: u64,
    ) -> Result<Arc<Room>, RoomError> {
        let code = code.into();
        let mut rooms = self.rooms.write().map_err(|_| RoomError::StoragePoisoned)?;
        if rooms.contains_key(&code) {
            return Err(RoomError::CodeTaken(code));
        }
        let room = Arc::new(Room::with_seed(code.clone(), Some(seed)));
        rooms.insert(code, Arc::clone(&room));
        Ok(room)
    }

    pub fn get_room(&self, code: &str) -> Result<Arc<Room>, RoomError> {
        self.rooms
            .read()
            .map_err(|_| RoomError::StoragePoisoned)?
            .get(code)
            .cloned()
            .ok_or_else(|| RoomError::RoomNotFound(code.to_string()))
    }

    /// Seats a participant in an existing room.
    pub fn join(
        &self,
        code: &str,
        participant_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Arc<Room>, RoomError> {
        let room = self.get_room(code)?;
        room.add_seat(participant_id, display_name)?;
        Ok(room)
    }

    pub fn start_hand(&self, code: &str) -> Result<(), RoomError> {
        self.get_room(code)?.start_new_hand()
    }

    pub fn action(
        &self,
        code: &str,
        participant_id: &str,
        action: PlayerAction,
    ) -> Result<(), RoomError> {
        self.get_room(code)?.process_action(participant_id, action)
    }

    /// Deals the next hand if both seats still hold chips, otherwise
    /// reports the decided match.
    pub fn next_hand(&self, code: &str) -> Result<NextHand, RoomError> {
        let room = self.get_room(code)?;
        if room.can_continue() {
            room.start_new_hand()?;
            Ok(NextHand::Dealt)
        } else {
            let info = room
                .winner_info()?
                .ok_or(RoomError::Game(GameError::NoHandInProgress))?;
            tracing::info!(room = %code, winner = %info.winner_name, "match decided");
            Ok(NextHand::MatchOver(info))
        }
    }

    pub fn reset_match(&self, code: &str) -> Result<(), RoomError> {
        self.get_room(code)?.reset_match()
    }

    pub fn projection(&self, code: &str, participant_id: &str) -> Result<StateView, RoomError> {
        self.get_room(code)?.projection(participant_id)
    }

    pub fn can_continue(&self, code: &str) -> Result<bool, RoomError> {
        Ok(self.get_room(code)?.can_continue())
    }

    pub fn winner_info(&self, code: &str) -> Result<Option<WinnerInfo>, RoomError> {
        self.get_room(code)?.winner_info()
    }

    /// Discards a room, e.g. when the delivery layer detects a disconnect.
    /// There are no reconnection semantics; the room is simply gone.
    pub fn remove_room(&self, code: &str) -> Result<(), RoomError> {
        let removed = self
            .rooms
            .write()
            .map_err(|_| RoomError::StoragePoisoned)?
            .remove(code);
        match removed {
            Some(_) => {
                tracing::info!(room = %code, "room discarded");
                Ok(())
            }
            None => Err(RoomError::RoomNotFound(code.to_string())),
        }
    }

    pub fn active_rooms(&self) -> Vec<String> {
        match self.rooms.read() {
            Ok(rooms) => rooms.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Drops rooms that have seen no activity for `ttl`. A stalled
    /// participant keeps a hand pending forever; the sweep is how a host
    /// reclaims those rooms.
    pub fn cleanup_idle_rooms(&self, ttl: Duration) {
        let mut guard = match self.rooms.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.retain(|code, room| {
            let idle = room.is_idle(ttl);
            if idle {
                tracing::info!(room = %code, "idle room discarded");
            }
            !idle
        });
    }
}
