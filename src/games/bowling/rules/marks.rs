//! Strike and spare detection.

use super::super::PIN_COUNT;
use tracing::instrument;

/// Returns true if the first roll knocked down every pin.
#[instrument]
pub fn is_strike(rolls: &[u8]) -> bool {
    rolls.first() == Some(&PIN_COUNT)
}

/// Returns true if the first two rolls cleared the rack without a strike.
#[instrument]
pub fn is_spare(rolls: &[u8]) -> bool {
    match rolls {
        [first, second, ..] => *first < PIN_COUNT && first + second == PIN_COUNT,
        _ => false,
    }
}

/// Renders rolls in scorecard notation.
///
/// `X` clears a fresh rack, `/` clears the pins left by the previous
/// roll, `-` is a gutter ball. Symbols are separated by a single space.
pub fn render_marks(rolls: &[u8]) -> String {
    let mut standing = PIN_COUNT;
    let mut fresh = true;
    let mut symbols = Vec::with_capacity(rolls.len());

    for &pins in rolls {
        let symbol = if fresh && pins == PIN_COUNT {
            "X".to_string()
        } else if pins == standing {
            "/".to_string()
        } else if pins == 0 {
            "-".to_string()
        } else {
            pins.to_string()
        };
        symbols.push(symbol);

        standing = standing.saturating_sub(pins);
        fresh = standing == 0;
        if fresh {
            standing = PIN_COUNT;
        }
    }

    symbols.join(" ")
}
