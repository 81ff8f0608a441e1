//! Core domain types for ten-pin bowling.

use super::rules;
use serde::{Deserialize, Serialize};

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame, the only one that earns fill balls.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins standing on a fresh rack.
pub const PIN_COUNT: u8 = 10;

/// Phase of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for the player to start.
    #[default]
    NotStarted,
    /// Rolls are being accepted.
    InProgress,
    /// The tenth frame is closed.
    Finished,
}

impl Phase {
    /// Returns true if rolls are accepted in this phase.
    pub fn accepts_rolls(self) -> bool {
        matches!(self, Phase::InProgress)
    }
}

/// One of the ten frames on the board.
///
/// `score` is the frame's own pins plus whatever bonus pins it has been
/// credited so far. It is not a running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub(crate) index: usize,
    pub(crate) rolls: Vec<u8>,
    pub(crate) is_strike: bool,
    pub(crate) is_spare: bool,
    pub(crate) base_score: u32,
    pub(crate) score: u32,
}

impl Frame {
    /// Creates an empty frame at the given index (0-9).
    pub fn new(index: usize) -> Self {
        Self {
            index,
            rolls: Vec::new(),
            is_strike: false,
            is_spare: false,
            base_score: 0,
            score: 0,
        }
    }

    /// Returns the frame index (0-9).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the pins knocked down by each roll, in order.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Returns true if the first roll knocked down every pin.
    pub fn is_strike(&self) -> bool {
        self.is_strike
    }

    /// Returns true if the first two rolls cleared the rack without a strike.
    pub fn is_spare(&self) -> bool {
        self.is_spare
    }

    /// Sum of this frame's own rolls.
    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    /// Own pins plus credited bonus pins.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Bonus pins credited from later rolls.
    pub fn bonus(&self) -> u32 {
        self.score.saturating_sub(self.base_score)
    }

    /// Returns true for the tenth frame.
    pub fn is_last(&self) -> bool {
        self.index == LAST_FRAME
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_complete(&self) -> bool {
        rules::is_complete(self.index, &self.rolls)
    }

    /// Pins standing before the next roll in this frame.
    pub fn standing_pins(&self) -> u8 {
        rules::standing_pins(&self.rolls)
    }

    /// Scorecard notation for the rolls so far, e.g. `X`, `7 /` or `9 -`.
    pub fn marks(&self) -> String {
        rules::render_marks(&self.rolls)
    }

    /// Appends a roll and reclassifies the frame.
    pub(super) fn push_roll(&mut self, pins: u8) {
        self.rolls.push(pins);
        self.base_score += u32::from(pins);
        self.score += u32::from(pins);
        self.is_strike = rules::is_strike(&self.rolls);
        self.is_spare = rules::is_spare(&self.rolls);
    }

    /// Adds bonus pins owed by a pending credit.
    pub(super) fn credit(&mut self, pins: u8) {
        self.score += u32::from(pins);
    }
}

/// A bonus still owed to a strike or spare frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCredit {
    pub(crate) target: usize,
    pub(crate) remaining: u8,
}

impl PendingCredit {
    /// Rolls owed to a strike.
    pub const STRIKE_ROLLS: u8 = 2;
    /// Rolls owed to a spare.
    pub const SPARE_ROLLS: u8 = 1;

    /// Credit for a strike in the given frame.
    pub fn strike(target: usize) -> Self {
        Self {
            target,
            remaining: Self::STRIKE_ROLLS,
        }
    }

    /// Credit for a spare in the given frame.
    pub fn spare(target: usize) -> Self {
        Self {
            target,
            remaining: Self::SPARE_ROLLS,
        }
    }

    /// Credit owed to a freshly closed frame, if any.
    ///
    /// The tenth frame never owes: its fill balls are its own rolls.
    pub fn for_frame(frame: &Frame) -> Option<Self> {
        if frame.is_last() {
            None
        } else if frame.is_strike {
            Some(Self::strike(frame.index))
        } else if frame.is_spare {
            Some(Self::spare(frame.index))
        } else {
            None
        }
    }

    /// Index of the frame awaiting bonus pins.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Future rolls still owed.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}
