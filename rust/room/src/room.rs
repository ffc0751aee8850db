use std::sync::Mutex;
use std::time::{Duration, Instant};

use blindside_engine::engine::Engine;
use blindside_engine::errors::GameError;
use blindside_engine::hand::HandWinner;
use blindside_engine::player::{other, PlayerAction, MAX_RAISES_PER_HAND};
use blindside_engine::rules;

use crate::errors::RoomError;
use crate::view::{SeatChips, StateView, WinnerInfo};

/// A persistent identity at the table. Seats are ordered: the seat added
/// first (index 0) acts first in every hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub participant_id: String,
    pub display_name: String,
}

/// One game room: two ordered seats and the match state they share.
///
/// The engine context is created lazily on the first hand so a half-filled
/// room carries no chip state. All mutation funnels through the room's
/// mutexes, which is the explicit single-writer contract the engine
/// relies on: two near-simultaneous actions from the two participants are
/// serialized here rather than racing on the hand.
#[derive(Debug)]
pub struct Room {
    code: String,
    seed: Option<u64>,
    seats: Mutex<Vec<Seat>>,
    engine: Mutex<Option<Engine>>,
    last_active: Mutex<Instant>,
}

impl Room {
    pub fn new(code: impl Into<String>) -> Self {
        Self::with_seed(code, None)
    }

    /// Deterministic room for replay and tests; live rooms seed from
    /// OS entropy so shuffles stay independent across rooms.
    pub fn with_seed(code: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            code: code.into(),
            seed,
            seats: Mutex::new(Vec::with_capacity(2)),
            engine: Mutex::new(None),
            last_active: Mutex::new(Instant::now()),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Seats a participant. Re-joining with a known id only refreshes the
    /// display name; a third identity is turned away.
    pub fn add_seat(
        &self,
        participant_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<(), RoomError> {
        let participant_id = participant_id.into();
        let display_name = display_name.into();
        let mut seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;

        if let Some(seat) = seats.iter_mut().find(|s| s.participant_id == participant_id) {
            seat.display_name = display_name;
            return Ok(());
        }
        if seats.len() >= 2 {
            return Err(RoomError::RoomFull);
        }

        tracing::info!(
            room = %self.code,
            participant = %participant_id,
            name = %display_name,
            seat = seats.len(),
            "participant seated"
        );
        seats.push(Seat {
            participant_id,
            display_name,
        });
        self.touch();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.seats.lock().map(|s| s.len() >= 2).unwrap_or(false)
    }

    pub fn seats(&self) -> Result<Vec<Seat>, RoomError> {
        Ok(self
            .seats
            .lock()
            .map_err(|_| RoomError::StoragePoisoned)?
            .clone())
    }

    fn seat_index(&self, participant_id: &str) -> Result<usize, RoomError> {
        self.seats
            .lock()
            .map_err(|_| RoomError::StoragePoisoned)?
            .iter()
            .position(|s| s.participant_id == participant_id)
            .ok_or_else(|| RoomError::UnknownParticipant(participant_id.to_string()))
    }

    /// Deals the next hand. The chip-tracking context is created on the
    /// first call; afterwards stacks carry over from hand to hand.
    pub fn start_new_hand(&self) -> Result<(), RoomError> {
        {
            let seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;
            if seats.len() != 2 {
                return Err(RoomError::NotEnoughPlayers);
            }
        }

        let mut engine = self.engine.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let engine = engine.get_or_insert_with(|| Engine::new(self.seed));
        engine.start_hand()?;

        tracing::info!(
            room = %self.code,
            hand_number = engine.hand_number(),
            "hand dealt"
        );
        self.touch();
        Ok(())
    }

    /// Forwards one action to the betting engine. Failures leave the hand
    /// untouched; the caller re-displays the current projection.
    pub fn process_action(
        &self,
        participant_id: &str,
        action: PlayerAction,
    ) -> Result<(), RoomError> {
        let seat = self.seat_index(participant_id)?;
        let mut engine = self.engine.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let engine = engine.as_mut().ok_or(GameError::NoHandInProgress)?;

        engine.apply_action(seat, action)?;
        tracing::debug!(
            room = %self.code,
            participant = %participant_id,
            seat,
            ?action,
            pot = engine.hand().pot,
            "action applied"
        );
        self.touch();
        Ok(())
    }

    /// Reinitializes both stacks to the starting value and clears the hand
    /// counter. Seat assignment is untouched; call [`Room::start_new_hand`]
    /// to deal again.
    pub fn reset_match(&self) -> Result<(), RoomError> {
        let mut engine = self.engine.lock().map_err(|_| RoomError::StoragePoisoned)?;
        if let Some(engine) = engine.as_mut() {
            engine.reset_match();
            tracing::info!(room = %self.code, "match reset");
        }
        self.touch();
        Ok(())
    }

    /// True while both seats still hold chips. False before the first hand
    /// and once either stack hits zero, which ends the match.
    pub fn can_continue(&self) -> bool {
        match self.engine.lock() {
            Ok(engine) => engine
                .as_ref()
                .is_some_and(|e| e.chips().iter().all(|&c| c > 0)),
            Err(_) => false,
        }
    }

    /// Match outcome: the first seat still holding chips is the winner.
    /// `None` until a match has actually been played.
    pub fn winner_info(&self) -> Result<Option<WinnerInfo>, RoomError> {
        // Lock order is seats before engine, everywhere
        let seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let engine = self.engine.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let Some(engine) = engine.as_ref() else {
            return Ok(None);
        };

        let chips = engine.chips();
        let winner_name = seats
            .iter()
            .enumerate()
            .find(|(idx, _)| chips[*idx] > 0)
            .map(|(_, seat)| seat.display_name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let chips = seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| SeatChips {
                participant_id: seat.participant_id.clone(),
                display_name: seat.display_name.clone(),
                chips: chips[idx],
            })
            .collect();

        Ok(Some(WinnerInfo { winner_name, chips }))
    }

    /// Builds the viewer's asymmetric projection: the opponent's card is in
    /// the clear, the viewer's own card only appears once the hand is over.
    pub fn projection(&self, viewer_participant_id: &str) -> Result<StateView, RoomError> {
        let viewer = self.seat_index(viewer_participant_id)?;
        let opponent = other(viewer);
        let seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;
        if seats.len() != 2 {
            return Err(RoomError::NotEnoughPlayers);
        }

        let engine = self.engine.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let engine = engine.as_ref().ok_or(GameError::NoHandInProgress)?;
        let hand = engine.hand();
        let chips = engine.chips();

        let winner = if hand.hand_over {
            Some(match hand.winner {
                Some(HandWinner::Seat(seat)) => seats[seat].display_name.clone(),
                Some(HandWinner::Tie) | None => "Tie".to_string(),
            })
        } else {
            None
        };

        Ok(StateView {
            room_code: self.code.clone(),
            hand_number: hand.hand_number,
            your_chips: chips[viewer],
            opponent_chips: chips[opponent],
            your_name: seats[viewer].display_name.clone(),
            opponent_name: seats[opponent].display_name.clone(),
            pot: hand.pot,
            current_bet: hand.current_bet,
            your_bet: hand.bets[viewer],
            opponent_bet: hand.bets[opponent],
            opponent_card: hand.card(opponent).map(|c| c.to_string()),
            your_card: if hand.hand_over {
                hand.card(viewer).map(|c| c.to_string())
            } else {
                None
            },
            is_your_turn: !hand.hand_over && hand.current_player == viewer,
            hand_over: hand.hand_over,
            winner,
            can_check: rules::can_check(hand, viewer),
            can_raise: rules::can_raise(hand, chips[viewer], viewer),
            min_raise: rules::min_raise(hand),
            raises_left: MAX_RAISES_PER_HAND - hand.raise_count[viewer],
        })
    }

    pub(crate) fn touch(&self) {
        if let Ok(mut guard) = self.last_active.lock() {
            *guard = Instant::now();
        }
    }

    pub(crate) fn is_idle(&self, ttl: Duration) -> bool {
        match self.last_active.lock() {
            Ok(last) => last.elapsed() >= ttl,
            Err(_) => false,
        }
    }
}
