use blindside_engine::engine::Engine;
use blindside_engine::errors::GameError;
use blindside_engine::player::PlayerAction as A;

#[test]
fn each_reraise_must_double_the_previous_increment() {
    let mut engine = Engine::new(Some(31));
    engine.start_hand().expect("deal");

    engine.apply_action(0, A::Raise(1)).expect("open for 1");
    assert_eq!(engine.hand().last_raise_amount, 1);

    // 1 below the doubled minimum is rejected, the doubled minimum is not
    assert_eq!(
        engine.apply_action(1, A::Raise(1)),
        Err(GameError::RaiseTooSmall {
            amount: 1,
            minimum: 2
        })
    );
    engine.apply_action(1, A::Raise(2)).expect("re-raise 2");
    assert_eq!(engine.hand().last_raise_amount, 2);

    engine.apply_action(0, A::Raise(4)).expect("re-raise 4");
    assert_eq!(engine.hand().last_raise_amount, 4);
    assert_eq!(engine.hand().current_bet, 8);
}

#[test]
fn two_raises_per_seat_then_cannot_raise() {
    let mut engine = Engine::new(Some(31));
    engine.start_hand().expect("deal");

    engine.apply_action(0, A::Raise(1)).expect("raise");
    engine.apply_action(1, A::Raise(2)).expect("raise");
    engine.apply_action(0, A::Raise(4)).expect("raise");
    engine.apply_action(1, A::Raise(8)).expect("raise");
    assert_eq!(engine.hand().raise_count, [2, 2]);

    // Third raise by the same seat always fails, regardless of size
    assert_eq!(engine.apply_action(0, A::Raise(16)), Err(GameError::CannotRaise));
    assert_eq!(engine.apply_action(0, A::Raise(1_000)), Err(GameError::CannotRaise));
}

#[test]
fn raise_reopens_the_action_for_the_opponent() {
    let mut engine = Engine::new(Some(31));
    engine.start_hand().expect("deal");

    // Seat 0 checks; a mutual check would end the hand, but seat 1 raises
    engine.apply_action(0, A::Check).expect("check");
    engine.apply_action(1, A::Raise(2)).expect("raise");
    assert!(!engine.hand().hand_over);
    assert_eq!(engine.hand().current_player, 0);

    // Seat 0 cannot check off the unmatched bet; a call settles it
    assert_eq!(engine.apply_action(0, A::Check), Err(GameError::CannotCheck));
    engine.apply_action(0, A::Call).expect("call");
    assert!(engine.hand().hand_over);
}

#[test]
fn mutual_check_requires_both_seats_to_act() {
    let mut engine = Engine::new(Some(31));
    engine.start_hand().expect("deal");

    engine.apply_action(0, A::Check).expect("first check");
    assert!(!engine.hand().hand_over);
    assert_eq!(engine.hand().current_player, 1);

    engine.apply_action(1, A::Check).expect("second check");
    assert!(engine.hand().hand_over);
}

#[test]
fn raise_updates_pot_bets_and_turn() {
    let mut engine = Engine::new(Some(31));
    engine.start_hand().expect("deal");

    engine.apply_action(0, A::Raise(3)).expect("raise");
    let hand = engine.hand();
    assert_eq!(hand.bets[0], 4);
    assert_eq!(hand.current_bet, 4);
    assert_eq!(hand.pot, 5);
    assert_eq!(hand.raise_count, [1, 0]);
    assert_eq!(hand.current_player, 1);
    assert_eq!(engine.stack(0), 96);
}
