//! Score ledger invariant: every frame's score can be rebuilt from the history.

use super::super::{Board, Frame, PendingCredit, Roll, rules};
use super::Invariant;

/// Invariant: Scores match the roll history.
///
/// Each frame's rolls are exactly the history entries recorded against it,
/// its base score is their sum, and its score adds the pins of the next one
/// (spare) or two (strike) rolls in the history, as many as exist so far.
pub struct ScoreLedgerInvariant;

fn bonus_rolls(frame: &Frame) -> usize {
    if frame.is_last() {
        0
    } else if frame.is_strike() {
        usize::from(PendingCredit::STRIKE_ROLLS)
    } else if frame.is_spare() {
        usize::from(PendingCredit::SPARE_ROLLS)
    } else {
        0
    }
}

fn frame_matches(frame: &Frame, history: &[Roll]) -> bool {
    let own: Vec<usize> = history
        .iter()
        .enumerate()
        .filter(|(_, roll)| roll.frame == frame.index())
        .map(|(position, _)| position)
        .collect();
    let rolls: Vec<u8> = own.iter().map(|&position| history[position].pins).collect();

    if rolls != frame.rolls()
        || frame.is_strike() != rules::is_strike(&rolls)
        || frame.is_spare() != rules::is_spare(&rolls)
    {
        return false;
    }

    let base: u32 = rolls.iter().map(|&pins| u32::from(pins)).sum();
    let bonus: u32 = own
        .last()
        .map(|&last| {
            history[last + 1..]
                .iter()
                .take(bonus_rolls(frame))
                .map(|roll| u32::from(roll.pins))
                .sum()
        })
        .unwrap_or(0);

    frame.base_score() == base && frame.score() == base + bonus
}

impl Invariant<Board> for ScoreLedgerInvariant {
    fn holds(board: &Board) -> bool {
        board
            .frames()
            .iter()
            .all(|frame| frame_matches(frame, board.history()))
    }

    fn description() -> &'static str {
        "Frame scores match the roll history"
    }
}
