//! Standing-pin bookkeeping for the sum cap.

use super::super::PIN_COUNT;
use tracing::instrument;

/// Pins standing before the next roll, given the rolls already in a frame.
///
/// A roll that clears the rack (strike or spare) resets it to ten. In
/// frames 1-9 that only happens on the frame's last roll, so this reduces
/// to `10 - base_score`; in the tenth frame it gives the fill balls a fresh
/// rack.
#[instrument]
pub fn standing_pins(rolls: &[u8]) -> u8 {
    rolls.iter().fold(PIN_COUNT, |standing, &pins| {
        match standing.saturating_sub(pins) {
            0 => PIN_COUNT,
            left => left,
        }
    })
}
