//! Frame cap invariant: no frame holds more rolls or pins than the rules allow.

use super::super::rules::roll_limit;
use super::super::{Board, Frame, PIN_COUNT};
use super::Invariant;

/// Invariant: Every roll fits on its rack and no frame exceeds its roll limit.
///
/// Frames 1-9 never total more than ten pins. The tenth frame may, but
/// each of its rolls still fits the pins standing at the time. Frames past
/// the active one are empty.
pub struct FrameCapInvariant;

fn rack_respected(frame: &Frame) -> bool {
    let mut standing = PIN_COUNT;
    for &pins in frame.rolls() {
        if pins > standing {
            return false;
        }
        standing = match standing - pins {
            0 => PIN_COUNT,
            left => left,
        };
    }
    true
}

impl Invariant<Board> for FrameCapInvariant {
    fn holds(board: &Board) -> bool {
        board.frames().iter().all(|frame| {
            let within_limit = frame.rolls().len() <= roll_limit(frame.index());
            let capped = frame.is_last() || frame.base_score() <= u32::from(PIN_COUNT);
            let untouched = frame.index() <= board.active_frame_index() || frame.rolls().is_empty();
            within_limit && capped && untouched && rack_respected(frame)
        })
    }

    fn description() -> &'static str {
        "Frames respect their roll limit and pin cap"
    }
}
