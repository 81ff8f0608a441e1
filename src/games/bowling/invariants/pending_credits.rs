//! Pending credit invariant: every outstanding bonus is owed and ordered.

use super::super::{Board, LAST_FRAME, PendingCredit};
use super::Invariant;

/// Invariant: Pending credits target closed strike or spare frames.
///
/// Each credit points at a frame before the active one (never the tenth),
/// owes between one roll and the frame's full bonus, and credits are kept
/// in creation order, which is ascending target order.
pub struct PendingCreditsInvariant;

impl Invariant<Board> for PendingCreditsInvariant {
    fn holds(board: &Board) -> bool {
        let credits = board.pending_credits();
        let ordered = credits.windows(2).all(|pair| pair[0].target < pair[1].target);

        ordered
            && credits.iter().all(|credit| {
                board.frame(credit.target).is_some_and(|frame| {
                    let owed = if frame.is_strike() {
                        PendingCredit::STRIKE_ROLLS
                    } else if frame.is_spare() {
                        PendingCredit::SPARE_ROLLS
                    } else {
                        0
                    };
                    credit.target < LAST_FRAME
                        && credit.target < board.active_frame_index()
                        && (1..=owed).contains(&credit.remaining)
                })
            })
    }

    fn description() -> &'static str {
        "Pending credits target closed strike or spare frames in order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(PendingCreditsInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_consecutive_strikes_hold() {
        let mut board = Board::new();
        board.record_roll(10);
        board.record_roll(10);
        assert_eq!(board.pending_credits().len(), 2);
        assert!(PendingCreditsInvariant::holds(&board));
    }

    #[test]
    fn test_credit_for_open_frame_violates() {
        let mut board = Board::new();
        board.record_roll(3);
        board.record_roll(4);
        board.pending.push(PendingCredit::spare(0));
        assert!(!PendingCreditsInvariant::holds(&board));
    }

    #[test]
    fn test_out_of_order_credits_violate() {
        let mut board = Board::new();
        board.record_roll(10);
        board.record_roll(10);
        board.pending.reverse();
        assert!(!PendingCreditsInvariant::holds(&board));
    }

    #[test]
    fn test_spare_owing_two_violates() {
        let mut board = Board::new();
        board.record_roll(5);
        board.record_roll(5);
        board.pending[0].remaining = 2;
        assert!(!PendingCreditsInvariant::holds(&board));
    }
}
