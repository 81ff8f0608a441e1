//! Read-only views of a game for presentation.

use super::board::Board;
use super::types::{Frame, Phase};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One frame as a scorecard shows it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FrameView {
    /// Frame index (0-9).
    index: usize,
    /// Pins knocked down by each roll.
    rolls: Vec<u8>,
    /// First roll cleared the rack.
    is_strike: bool,
    /// First two rolls cleared the rack.
    is_spare: bool,
    /// Own pins plus credited bonus.
    score: u32,
    /// Scorecard notation, e.g. `X` or `7 /`.
    marks: String,
    /// Cumulative score through this frame.
    running_total: u32,
}

impl FrameView {
    fn new(frame: &Frame, running_total: u32) -> Self {
        Self {
            index: frame.index(),
            rolls: frame.rolls().to_vec(),
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            score: frame.score(),
            marks: frame.marks(),
            running_total,
        }
    }
}

/// Everything a presentation layer reads to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game phase.
    phase: Phase,
    /// Frame accepting rolls.
    active_frame: usize,
    /// All ten frames.
    frames: Vec<FrameView>,
    /// Sum of every frame's score.
    total: u32,
}

impl GameSnapshot {
    /// Captures the board as it stands.
    pub fn capture(phase: Phase, board: &Board) -> Self {
        let frames = board
            .frames()
            .iter()
            .zip(board.running_totals())
            .map(|(frame, running_total)| FrameView::new(frame, running_total))
            .collect();

        Self {
            phase,
            active_frame: board.active_frame_index(),
            frames,
            total: board.total_score(),
        }
    }
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for frame in &self.frames {
            let total = if frame.rolls.is_empty() {
                String::new()
            } else {
                frame.running_total.to_string()
            };
            let cursor = if self.phase == Phase::InProgress && frame.index == self.active_frame {
                '>'
            } else {
                ' '
            };
            writeln!(f, "{}{:>2} | {:<5} | {:>3}", cursor, frame.index + 1, frame.marks, total)?;
        }
        write!(f, "{} - total {}", self.phase, self.total)
    }
}
