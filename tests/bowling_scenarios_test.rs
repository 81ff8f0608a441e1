//! Tests for complete bowling games scored through the controller.

use strictly_bowling::{GameController, LAST_FRAME, Phase, RollError};

fn started() -> GameController {
    let mut game = GameController::new();
    game.start().expect("new game should start");
    game
}

#[test]
fn test_all_gutters() {
    let mut game = started();
    for roll in 0..20 {
        let outcome = game.submit_roll(0);
        assert!(outcome.accepted, "roll {} rejected", roll);
        assert_eq!(outcome.game_complete, roll == 19);
    }

    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.board().frames().iter().all(|frame| frame.score() == 0));
    assert_eq!(game.board().total_score(), 0);
}

#[test]
fn test_perfect_game() {
    let mut game = started();
    for _ in 0..12 {
        assert!(game.submit_roll(10).accepted);
    }

    let frames = game.board().frames();
    for frame in &frames[..LAST_FRAME] {
        assert!(frame.is_strike());
        assert_eq!(frame.score(), 30);
    }
    assert_eq!(frames[LAST_FRAME].rolls(), &[10, 10, 10]);
    assert_eq!(game.board().total_score(), 300);
    assert_eq!(game.phase(), Phase::Finished);
    assert!(!game.submit_roll(10).accepted);
}

#[test]
fn test_spare_then_roll() {
    let mut game = started();
    game.submit_roll(5);
    game.submit_roll(5);

    let frame = &game.board().frames()[0];
    assert!(frame.is_spare());
    assert_eq!(frame.score(), 10);

    game.submit_roll(3);
    assert_eq!(game.board().frames()[0].score(), 13);
    assert_eq!(game.board().frames()[1].base_score(), 3);
}

#[test]
fn test_tenth_frame_strike_bonus() {
    let mut game = started();
    for _ in 0..18 {
        game.submit_roll(0);
    }
    assert_eq!(game.board().active_frame_index(), LAST_FRAME);

    assert!(game.submit_roll(10).accepted);
    assert!(game.submit_roll(4).accepted);
    let last = game.submit_roll(3);
    assert!(last.accepted);
    assert!(last.game_complete);

    let tenth = &game.board().frames()[LAST_FRAME];
    assert_eq!(tenth.rolls(), &[10, 4, 3]);
    assert_eq!(tenth.score(), 17);
    assert!(!game.submit_roll(0).accepted);
    assert_eq!(game.board().frames()[LAST_FRAME].rolls().len(), 3);
}

#[test]
fn test_overflow_rejection() {
    let mut game = started();
    game.submit_roll(6);

    let outcome = game.submit_roll(5);
    assert!(!outcome.accepted);
    assert_eq!(game.board().frames()[0].rolls(), &[6]);
    assert_eq!(
        game.check_roll(5),
        Err(RollError::FrameOverflow {
            standing: 4,
            value: 5
        })
    );
}

#[test]
fn test_typical_game() {
    // 10 | 7 3 | 9 0 | 10 | 0 8 | 8 2 | 0 6 | 10 | 10 | 10 8 1
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let game = GameController::replay(&rolls);

    let totals = game.board().running_totals();
    assert_eq!(totals, [20, 39, 48, 66, 74, 84, 90, 120, 148, 167]);
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn test_tenth_frame_open_gets_no_fill_ball() {
    let mut rolls = vec![0; 18];
    rolls.extend([3, 6]);
    let mut game = GameController::replay(&rolls);

    assert_eq!(game.phase(), Phase::Finished);
    assert!(!game.submit_roll(1).accepted);
    assert_eq!(game.board().total_score(), 9);
}

#[test]
fn test_snapshot_marks() {
    let game = GameController::replay(&[10, 7, 3, 0, 9]);
    let snapshot = game.snapshot();
    let marks: Vec<&str> = snapshot.frames()[..3]
        .iter()
        .map(|frame| frame.marks().as_str())
        .collect();
    assert_eq!(marks, vec!["X", "7 /", "- 9"]);
    assert_eq!(*snapshot.total(), 20 + 10 + 9);
}

#[test]
fn test_gutter_then_ten_is_a_spare() {
    let game = GameController::replay(&[0, 10, 4]);
    let snapshot = game.snapshot();
    let frame = &snapshot.frames()[0];

    assert!(*frame.is_spare());
    assert!(!*frame.is_strike());
    assert_eq!(frame.marks(), "- /");
    assert_eq!(*frame.score(), 14);
}
