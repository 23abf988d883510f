//! Tests for the live-play turn gate.

use strictly_coins::{
    CoinSequence, GameError, GateState, InputError, Move, MoveError, Outcome, Parity, Player,
    Side, Solution, Transition, TurnGate,
};

fn coins(values: &[i64]) -> CoinSequence {
    CoinSequence::new(values, Parity::Even).expect("valid coins")
}

#[test]
fn test_conservation_at_every_step() {
    let line = coins(&[4, 15, 7, 3, 8, 9]);
    let mut gate = TurnGate::new(line.clone(), Player::First);
    let picks = [Side::Left, Side::Right, Side::Right, Side::Left, Side::Left, Side::Right];

    let mut removed = 0;
    for (step, side) in picks.into_iter().enumerate() {
        assert!(!gate.is_finished(), "finished early at step {step}");
        let mv = gate.select_side(side).expect("end pick is legal").taken();
        removed += mv.value;
        assert_eq!(gate.score(Player::First) + gate.score(Player::Second), removed);
    }

    assert!(gate.is_finished());
    assert_eq!(gate.history().len(), line.len());
    assert_eq!(removed, line.total());
}

#[test]
fn test_replaying_optimal_line_reaches_same_result() {
    let line = coins(&[4, 15, 7, 3, 8, 9]);
    let solution = Solution::solve(&line, Player::First);

    let gate = TurnGate::replay(line, Player::First, solution.moves()).expect("optimal line is legal");
    assert_eq!(gate.state(), GateState::Finished(solution.result()));
    assert_eq!(gate.result().map(|r| r.first_total()), Some(27));
}

#[test]
fn test_second_player_can_open() {
    let mut gate = TurnGate::new(coins(&[5, 5]), Player::Second);
    assert_eq!(gate.current_player(), Some(Player::Second));

    gate.select_coin(0).unwrap();
    assert_eq!(gate.current_player(), Some(Player::First));

    match gate.select_coin(1).unwrap() {
        Transition::Finished { result, .. } => {
            assert_eq!(result.outcome(), Outcome::Tie);
            assert_eq!(result.total(Player::Second), 5);
        }
        Transition::Continued(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_second_player_wins() {
    let mut gate = TurnGate::new(coins(&[1, 9, 2, 3]), Player::First);
    gate.select_coin(0).unwrap(); // P1: 1
    gate.select_coin(1).unwrap(); // P2: 9
    gate.select_coin(3).unwrap(); // P1: 3
    let transition = gate.select_coin(2).unwrap(); // P2: 2

    let Transition::Finished { result, .. } = transition else {
        panic!("Game should be finished");
    };
    assert_eq!(result.outcome(), Outcome::Winner(Player::Second));
    assert_eq!((result.first_total(), result.second_total()), (4, 11));
}

#[test]
fn test_illegal_moves_leave_state_untouched() {
    let mut gate = TurnGate::new(coins(&[4, 15, 7, 3]), Player::First);
    gate.select_coin(3).unwrap();
    let snapshot = (gate.state(), gate.history().to_vec());

    for index in [1, 3, 42] {
        assert!(matches!(
            gate.select_coin(index),
            Err(MoveError::NotAnEnd { .. })
        ));
        assert_eq!((gate.state(), gate.history().to_vec()), snapshot);
    }
}

#[test]
fn test_errors_convert_into_game_error() {
    fn open(values: &[i64]) -> Result<TurnGate, GameError> {
        let mut gate = TurnGate::new(CoinSequence::new(values, Parity::Even)?, Player::First);
        gate.select_coin(1)?;
        Ok(gate)
    }

    assert_eq!(
        open(&[1, 2, 3]).unwrap_err(),
        GameError::InvalidInput(InputError::OddLength(3))
    );
    assert!(matches!(
        open(&[1, 2, 3, 4]).unwrap_err(),
        GameError::IllegalMove(MoveError::NotAnEnd { index: 1, .. })
    ));
    assert!(open(&[1, 2]).is_ok());
}

#[test]
fn test_replay_rejects_recorded_value_mismatch() {
    let line = coins(&[4, 15, 7, 3]);
    let moves = [
        Move::new(Player::First, 0, 4, 0),
        Move::new(Player::Second, 3, 30, 1),
    ];

    let err = TurnGate::replay(line, Player::First, &moves).unwrap_err();
    assert_eq!(
        err,
        MoveError::ValueMismatch {
            index: 3,
            expected: 3,
            got: 30
        }
    );
}
