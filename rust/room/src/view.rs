use serde::{Deserialize, Serialize};

/// The asymmetric per-participant view of a room's state.
///
/// This is the only structure the room layer ever hands outward. The
/// viewer's own card is present only once the hand is over; the opponent's
/// card is visible the whole hand. Cards are rendered as display strings
/// (`"A♠"`, `"10♥"`) ready for the delivery layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateView {
    pub room_code: String,
    pub hand_number: u32,
    pub your_chips: u32,
    pub opponent_chips: u32,
    pub your_name: String,
    pub opponent_name: String,
    pub pot: u32,
    pub current_bet: u32,
    pub your_bet: u32,
    pub opponent_bet: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_card: Option<String>,
    /// Revealed only when `hand_over` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_card: Option<String>,
    pub is_your_turn: bool,
    pub hand_over: bool,
    /// Winner's display name, or `"Tie"`; absent while the hand runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub can_check: bool,
    pub can_raise: bool,
    pub min_raise: u32,
    pub raises_left: u8,
}

/// Match outcome once a stack has hit zero: the surviving seat's name and
/// both final chip counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerInfo {
    pub winner_name: String,
    pub chips: Vec<SeatChips>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatChips {
    pub participant_id: String,
    pub display_name: String,
    pub chips: u32,
}
