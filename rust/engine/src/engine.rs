use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, HandWinner};
use crate::player::{other, PlayerAction, ANTE, FIRST_ACTOR, STARTING_STACK};
use crate::rules::{validate_action, ValidatedAction};

/// The betting engine for one two-seat match.
///
/// Owns the deck, both chip stacks and the current [`Hand`], and applies
/// one validated action at a time. Chip stacks persist across hands;
/// [`Engine::reset_match`] reseeds them. The engine never blocks and holds
/// no locks: callers serialize access per room.
///
/// # Examples
///
/// ```
/// use blindside_engine::engine::Engine;
/// use blindside_engine::player::PlayerAction;
///
/// let mut engine = Engine::new(Some(42));
/// engine.start_hand().expect("deal");
///
/// // Antes are posted and seat 0 acts first
/// assert_eq!(engine.chips(), [99, 99]);
/// assert_eq!(engine.hand().pot, 2);
/// assert_eq!(engine.hand().current_player, 0);
///
/// // A check by each seat settles the hand at showdown
/// engine.apply_action(0, PlayerAction::Check).expect("check");
/// engine.apply_action(1, PlayerAction::Check).expect("check");
/// assert!(engine.hand().hand_over);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    chips: [u32; 2],
    hand: Hand,
    hand_started: bool,
}

impl Engine {
    /// New match with both stacks at [`STARTING_STACK`]. A seed makes the
    /// whole match deterministic; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let deck = match seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Self {
            deck,
            chips: [STARTING_STACK; 2],
            hand: Hand::default(),
            hand_started: false,
        }
    }

    pub fn chips(&self) -> [u32; 2] {
        self.chips
    }

    pub fn stack(&self, seat: usize) -> u32 {
        self.chips[seat]
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_number(&self) -> u32 {
        self.hand.hand_number
    }

    /// Deals a fresh hand: shuffles, gives each seat one hidden card, posts
    /// antes and hands the action to seat A.
    ///
    /// A seat holding less than the ante posts its entire remaining stack;
    /// the stack floors at 0 and the hand still starts. Stacks otherwise
    /// carry over from the previous hand.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.deck.shuffle();
        let first = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
        let second = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
        self.begin_hand([first, second]);
        Ok(())
    }

    /// Starts a hand with a known deal instead of a shuffled one. Used for
    /// replaying recorded hands and for exercising specific showdowns.
    pub fn start_hand_with_cards(&mut self, cards: [Card; 2]) {
        self.begin_hand(cards);
    }

    fn begin_hand(&mut self, cards: [Card; 2]) {
        self.hand.reset_for_deal();
        self.hand.hand_number += 1;
        self.hand.cards = [Some(cards[0]), Some(cards[1])];

        for seat in 0..2 {
            let ante = ANTE.min(self.chips[seat]);
            self.chips[seat] -= ante;
            self.hand.bets[seat] = ante;
            self.hand.pot += ante;
        }
        self.hand.current_bet = ANTE;
        self.hand.current_player = FIRST_ACTOR;
        self.hand_started = true;
    }

    /// Validates and applies one action for the given seat.
    ///
    /// On any error the hand and both stacks are left untouched; validation
    /// happens in full before the first mutation.
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        if !self.hand_started {
            return Err(GameError::NoHandInProgress);
        }
        if self.hand.hand_over {
            return Err(GameError::HandAlreadyOver);
        }
        if seat != self.hand.current_player {
            return Err(GameError::NotYourTurn {
                expected: self.hand.current_player,
                actual: seat,
            });
        }

        let validated = validate_action(&self.hand, self.chips[seat], seat, action)?;
        match validated {
            ValidatedAction::Fold => self.fold(seat),
            ValidatedAction::Check => self.check(seat),
            ValidatedAction::Call(amount) => {
                self.commit_chips(seat, amount);
                // A call always settles the hand; there is no further street
                self.showdown();
            }
            ValidatedAction::Raise { total, increment } => self.raise(seat, total, increment),
        }
        Ok(())
    }

    fn fold(&mut self, seat: usize) {
        let opponent = other(seat);
        self.hand.folded[seat] = true;
        self.hand.hand_over = true;
        self.hand.winner = Some(HandWinner::Seat(opponent));
        self.chips[opponent] += self.hand.pot;
    }

    fn check(&mut self, seat: usize) {
        self.hand.acted_this_round.insert(seat);
        let opponent = other(seat);
        let bets_level = self.hand.bets[seat] == self.hand.bets[opponent];
        if bets_level && self.hand.acted_this_round.both_acted() {
            self.showdown();
        } else {
            self.hand.current_player = opponent;
        }
    }

    fn raise(&mut self, seat: usize, total: u32, increment: u32) {
        self.commit_chips(seat, total);
        self.hand.current_bet = self.hand.current_bet.max(self.hand.bets[seat]);
        self.hand.last_raise_amount = increment;
        self.hand.raise_count[seat] += 1;
        // The raise opens a fresh sub-round: the opponent must act again
        self.hand.acted_this_round.reset_to(seat);
        self.hand.current_player = other(seat);
    }

    fn commit_chips(&mut self, seat: usize, amount: u32) {
        self.chips[seat] -= amount;
        self.hand.bets[seat] += amount;
        self.hand.pot += amount;
    }

    /// Compares the two hidden ranks and awards the pot. Suit never breaks
    /// a tie; equal ranks split the pot with integer division, so one chip
    /// of an odd pot is discarded.
    fn showdown(&mut self) {
        self.hand.hand_over = true;
        let (Some(a), Some(b)) = (self.hand.cards[0], self.hand.cards[1]) else {
            return;
        };

        let winner = if a.rank.value() > b.rank.value() {
            HandWinner::Seat(0)
        } else if b.rank.value() > a.rank.value() {
            HandWinner::Seat(1)
        } else {
            HandWinner::Tie
        };
        self.hand.winner = Some(winner);

        match winner {
            HandWinner::Seat(seat) => self.chips[seat] += self.hand.pot,
            HandWinner::Tie => {
                let half = self.hand.pot / 2;
                self.chips[0] += half;
                self.chips[1] += half;
            }
        }
    }

    /// Reseeds both stacks to [`STARTING_STACK`] and clears all hand state
    /// including the hand counter. Seats are not the engine's concern.
    pub fn reset_match(&mut self) {
        self.chips = [STARTING_STACK; 2];
        self.hand = Hand::default();
        self.hand_started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_before_first_deal_is_rejected() {
        let mut engine = Engine::new(Some(1));
        assert_eq!(
            engine.apply_action(0, PlayerAction::Check),
            Err(GameError::NoHandInProgress)
        );
    }

    #[test]
    fn wrong_seat_is_rejected_without_mutation() {
        let mut engine = Engine::new(Some(1));
        engine.start_hand().unwrap();
        assert_eq!(
            engine.apply_action(1, PlayerAction::Check),
            Err(GameError::NotYourTurn {
                expected: 0,
                actual: 1
            })
        );
        assert_eq!(engine.hand().pot, 2);
        assert_eq!(engine.chips(), [99, 99]);
    }

    #[test]
    fn fold_awards_pot_to_opponent() {
        let mut engine = Engine::new(Some(1));
        engine.start_hand().unwrap();
        engine.apply_action(0, PlayerAction::Fold).unwrap();
        assert!(engine.hand().hand_over);
        assert_eq!(engine.hand().winner, Some(HandWinner::Seat(1)));
        assert_eq!(engine.chips(), [99, 101]);
    }

    #[test]
    fn reset_match_reseeds_stacks_and_counter() {
        let mut engine = Engine::new(Some(1));
        engine.start_hand().unwrap();
        engine.apply_action(0, PlayerAction::Fold).unwrap();
        engine.reset_match();
        assert_eq!(engine.chips(), [STARTING_STACK, STARTING_STACK]);
        assert_eq!(engine.hand_number(), 0);
        assert_eq!(
            engine.apply_action(0, PlayerAction::Check),
            Err(GameError::NoHandInProgress)
        );
    }
}
