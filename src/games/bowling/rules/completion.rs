//! Frame completion rules.

use super::super::LAST_FRAME;
use super::marks::{is_spare, is_strike};
use tracing::instrument;

/// Maximum number of rolls a frame can hold.
pub fn roll_limit(index: usize) -> usize {
    if index == LAST_FRAME { 3 } else { 2 }
}

/// Returns true if the tenth frame's first two rolls earn a third.
pub fn earns_fill_ball(rolls: &[u8]) -> bool {
    is_strike(rolls) || is_spare(rolls)
}

/// Returns true once a frame accepts no more rolls.
///
/// Frames 1-9 close on a strike or after two rolls. The tenth frame closes
/// after two rolls unless they contain a strike or spare, and always after
/// three.
#[instrument]
pub fn is_complete(index: usize, rolls: &[u8]) -> bool {
    if index < LAST_FRAME {
        return is_strike(rolls) || rolls.len() >= roll_limit(index);
    }

    match rolls.len() {
        0 | 1 => false,
        2 => !earns_fill_ball(rolls),
        _ => true,
    }
}
