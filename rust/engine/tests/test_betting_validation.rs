use blindside_engine::engine::Engine;
use blindside_engine::errors::GameError;
use blindside_engine::player::PlayerAction as A;

fn fresh_engine() -> Engine {
    let mut engine = Engine::new(Some(21));
    engine.start_hand().expect("deal");
    engine
}

#[test]
fn check_facing_a_bet_is_rejected() {
    let mut engine = fresh_engine();
    engine.apply_action(0, A::Raise(3)).expect("raise");
    assert_eq!(engine.apply_action(1, A::Check), Err(GameError::CannotCheck));
}

#[test]
fn call_with_nothing_outstanding_is_rejected() {
    let mut engine = fresh_engine();
    // Both seats sit at the ante; there is nothing to call
    assert_eq!(engine.apply_action(0, A::Call), Err(GameError::NothingToCall));
}

#[test]
fn raise_below_minimum_reports_the_minimum() {
    let mut engine = fresh_engine();
    engine.apply_action(0, A::Raise(4)).expect("raise");
    // Escalation: next raise must be at least 8
    assert_eq!(
        engine.apply_action(1, A::Raise(7)),
        Err(GameError::RaiseTooSmall {
            amount: 7,
            minimum: 8
        })
    );
}

#[test]
fn rejected_action_leaves_hand_untouched() {
    let mut engine = fresh_engine();
    engine.apply_action(0, A::Raise(4)).expect("raise");
    let chips_before = engine.chips();
    let pot_before = engine.hand().pot;
    let bet_before = engine.hand().current_bet;

    assert!(engine.apply_action(1, A::Raise(7)).is_err());
    assert!(engine.apply_action(1, A::Check).is_err());
    assert!(engine.apply_action(0, A::Call).is_err());

    assert_eq!(engine.chips(), chips_before);
    assert_eq!(engine.hand().pot, pot_before);
    assert_eq!(engine.hand().current_bet, bet_before);
    assert_eq!(engine.hand().current_player, 1);
}

#[test]
fn actions_after_hand_over_are_rejected() {
    let mut engine = fresh_engine();
    engine.apply_action(0, A::Fold).expect("fold");
    assert_eq!(engine.apply_action(1, A::Check), Err(GameError::HandAlreadyOver));
    assert_eq!(engine.apply_action(0, A::Raise(2)), Err(GameError::HandAlreadyOver));
}

#[test]
fn out_of_turn_actions_are_rejected_for_both_seats() {
    let mut engine = fresh_engine();
    assert_eq!(
        engine.apply_action(1, A::Fold),
        Err(GameError::NotYourTurn {
            expected: 0,
            actual: 1
        })
    );
    engine.apply_action(0, A::Check).expect("check");
    assert_eq!(
        engine.apply_action(0, A::Check),
        Err(GameError::NotYourTurn {
            expected: 1,
            actual: 0
        })
    );
}
