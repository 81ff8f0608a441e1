//! The bowling board: ten frames and the bonus ledger.
//!
//! The board exclusively owns its frames and pending credits. Every
//! mutation goes through [`Board::record_roll`], which validates the
//! value, settles outstanding bonuses, appends the roll and advances the
//! active frame in one step.

use super::action::{Roll, RollError, RollOutcome};
use super::contracts::{Contract, RollContract};
use super::error::BoardError;
use super::invariants::{BowlingInvariants, InvariantSet};
use super::types::{FRAME_COUNT, Frame, LAST_FRAME, PIN_COUNT, PendingCredit};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ten frames, the pending credits still owed, and the active frame.
///
/// Deserialized boards are validated: indices must be in range and the
/// board must satisfy every bowling invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    pub(crate) frames: [Frame; FRAME_COUNT],
    pub(crate) pending: Vec<PendingCredit>,
    pub(crate) active: usize,
    pub(crate) history: Vec<Roll>,
}

impl Board {
    /// Creates a board with ten empty frames.
    #[instrument]
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(Frame::new),
            pending: Vec::new(),
            active: 0,
            history: Vec::new(),
        }
    }

    /// Returns all ten frames.
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Returns the frame at the given index (0-9).
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Returns the index of the frame accepting rolls.
    pub fn active_frame_index(&self) -> usize {
        self.active
    }

    /// Returns the frame accepting rolls.
    pub fn active_frame(&self) -> &Frame {
        &self.frames[self.active]
    }

    /// Returns the bonuses still owed, in creation order.
    pub fn pending_credits(&self) -> &[PendingCredit] {
        &self.pending
    }

    /// Returns every accepted roll, in order.
    pub fn history(&self) -> &[Roll] {
        &self.history
    }

    /// Returns true once the tenth frame is closed.
    pub fn is_complete(&self) -> bool {
        self.frames[LAST_FRAME].is_complete()
    }

    /// Validates a roll value against the active frame.
    ///
    /// Returns the value as a pin count if it would be accepted.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the value is not 0-10
    /// - `FrameClosed` if the active frame takes no more rolls
    /// - `FrameOverflow` if the value exceeds the pins still standing
    pub fn check_roll(&self, value: i32) -> Result<u8, RollError> {
        let pins = u8::try_from(value)
            .ok()
            .filter(|pins| *pins <= PIN_COUNT)
            .ok_or(RollError::OutOfRange(value))?;

        RollContract::pre(self, &Roll::new(self.active, pins))?;
        Ok(pins)
    }

    /// Returns true if [`Board::record_roll`] would accept the value.
    pub fn would_accept(&self, value: i32) -> bool {
        self.check_roll(value).is_ok()
    }

    /// Pin counts the next roll may take, ascending.
    pub fn accepted_values(&self) -> Vec<u8> {
        (0..=PIN_COUNT)
            .filter(|pins| self.would_accept(i32::from(*pins)))
            .collect()
    }

    /// Records a roll value.
    ///
    /// Invalid values are ignored: the board is unchanged and the outcome
    /// reports `accepted = false`. The reason is logged at debug level.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn record_roll(&mut self, value: i32) -> RollOutcome {
        let pins = match self.check_roll(value) {
            Ok(pins) => pins,
            Err(reason) => {
                debug!(%reason, "Roll rejected");
                return RollOutcome::rejected();
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let index = self.active;

        // Earlier strikes and spares take this roll before the frame does.
        self.resolve_credits(pins);

        let frame = &mut self.frames[index];
        let was_marked = frame.is_strike() || frame.is_spare();
        frame.push_roll(pins);
        let now_marked = frame.is_strike() || frame.is_spare();
        let complete = frame.is_complete();

        debug!(
            frame = index,
            roll = frame.rolls().len(),
            pins,
            strike = frame.is_strike(),
            spare = frame.is_spare(),
            "Roll recorded"
        );

        if !was_marked && now_marked {
            if let Some(credit) = PendingCredit::for_frame(&self.frames[index]) {
                debug!(target_frame = credit.target, owed = credit.remaining, "Bonus pending");
                self.pending.push(credit);
            }
        }

        self.history.push(Roll::new(index, pins));

        let mut outcome = RollOutcome {
            accepted: true,
            ..RollOutcome::default()
        };
        if complete {
            if index < LAST_FRAME {
                self.active += 1;
                outcome.frame_advanced = true;
            } else {
                outcome.game_complete = true;
            }
        }

        #[cfg(debug_assertions)]
        {
            let post = RollContract::post(&before, self);
            debug_assert!(post.is_ok(), "Roll postcondition failed: {:?}", post);
        }

        outcome
    }

    /// Credits every pending bonus with the roll, oldest first, and drops
    /// the ones that are paid off.
    fn resolve_credits(&mut self, pins: u8) {
        for credit in &mut self.pending {
            self.frames[credit.target].credit(pins);
            credit.remaining -= 1;
        }
        self.pending.retain(|credit| credit.remaining > 0);
    }

    /// Cumulative score after each frame.
    pub fn running_totals(&self) -> [u32; FRAME_COUNT] {
        let mut total = 0;
        std::array::from_fn(|index| {
            total += self.frames[index].score();
            total
        })
    }

    /// Sum of every frame's score.
    pub fn total_score(&self) -> u32 {
        self.frames.iter().map(Frame::score).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRecord {
    frames: [Frame; FRAME_COUNT],
    pending: Vec<PendingCredit>,
    active: usize,
    history: Vec<Roll>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    #[instrument(skip(record), fields(active = record.active))]
    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.active >= FRAME_COUNT {
            return Err(BoardError::new(format!(
                "active frame {} is out of range",
                record.active
            )));
        }
        if let Some((position, frame)) = record
            .frames
            .iter()
            .enumerate()
            .find(|(position, frame)| frame.index != *position)
        {
            return Err(BoardError::new(format!(
                "frame at position {} claims index {}",
                position, frame.index
            )));
        }
        if let Some(credit) = record.pending.iter().find(|c| c.target >= FRAME_COUNT) {
            return Err(BoardError::new(format!(
                "pending credit targets frame {}",
                credit.target
            )));
        }
        let pins_valid = record
            .frames
            .iter()
            .flat_map(|frame| frame.rolls.iter().copied())
            .chain(record.history.iter().map(|roll| roll.pins))
            .all(|pins| pins <= PIN_COUNT);
        if !pins_valid {
            return Err(BoardError::new("roll exceeds ten pins"));
        }

        let board = Self {
            frames: record.frames,
            pending: record.pending,
            active: record.active,
            history: record.history,
        };

        BowlingInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected stored board");
            BoardError::new(descriptions)
        })?;

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(values: &[i32]) -> Board {
        let mut board = Board::new();
        for value in values {
            assert!(board.record_roll(*value).accepted, "roll {} rejected", value);
        }
        board
    }

    #[test]
    fn test_board_round_trips_through_json() {
        let board = board_with(&[10, 7, 3, 4]);
        let json = serde_json::to_value(&board).unwrap();
        let restored: Board = serde_json::from_value(json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_deserialize_rejects_active_out_of_range() {
        let mut json = serde_json::to_value(board_with(&[3])).unwrap();
        json["active"] = serde_json::json!(12);
        let err = serde_json::from_value::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("active frame 12"));
    }

    #[test]
    fn test_deserialize_rejects_credit_out_of_range() {
        let mut json = serde_json::to_value(board_with(&[10])).unwrap();
        json["pending"][0]["target"] = serde_json::json!(40);
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_scores() {
        let mut json = serde_json::to_value(board_with(&[5, 5, 3])).unwrap();
        json["frames"][0]["score"] = serde_json::json!(2);
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.active_frame_index(), 0);
        assert!(board.pending_credits().is_empty());
        assert_eq!(board.total_score(), 0);
        assert!(!board.is_complete());
        for (index, frame) in board.frames().iter().enumerate() {
            assert_eq!(frame.index(), index);
        }
    }

    #[test]
    fn test_open_frame_advances_after_two_rolls() {
        let mut board = Board::new();
        let first = board.record_roll(3);
        assert!(first.accepted);
        assert!(!first.frame_advanced);

        let second = board.record_roll(4);
        assert!(second.frame_advanced);
        assert_eq!(board.active_frame_index(), 1);
        assert_eq!(board.frames()[0].score(), 7);
    }

    #[test]
    fn test_strike_advances_and_owes_two() {
        let mut board = Board::new();
        let outcome = board.record_roll(10);
        assert!(outcome.frame_advanced);
        assert_eq!(board.active_frame_index(), 1);
        assert_eq!(board.pending_credits(), &[PendingCredit::strike(0)]);
    }

    #[test]
    fn test_spare_owes_one() {
        let board = board_with(&[5, 5]);
        assert_eq!(board.pending_credits(), &[PendingCredit::spare(0)]);
        assert!(board.frames()[0].is_spare());
    }

    #[test]
    fn test_spare_then_roll() {
        let board = board_with(&[5, 5, 3]);
        assert_eq!(board.frames()[0].score(), 13);
        assert_eq!(board.frames()[1].base_score(), 3);
        assert!(board.pending_credits().is_empty());
    }

    #[test]
    fn test_one_roll_settles_two_strikes() {
        let board = board_with(&[10, 10, 4]);
        assert_eq!(board.frames()[0].score(), 24);
        assert_eq!(board.frames()[1].score(), 14);
        let owed = PendingCredit {
            target: 1,
            remaining: 1,
        };
        assert_eq!(board.pending_credits(), &[owed]);
    }

    #[test]
    fn test_overflow_rejected_without_mutation() {
        let mut board = board_with(&[6]);
        let before = board.clone();

        let outcome = board.record_roll(5);
        assert!(!outcome.accepted);
        assert_eq!(board, before);
        assert_eq!(board.frames()[0].rolls(), &[6]);
        assert_eq!(
            board.check_roll(5),
            Err(RollError::FrameOverflow {
                standing: 4,
                value: 5
            })
        );
    }

    #[test]
    fn test_overflow_ignores_credited_score() {
        // Frame 1 carries a spare bonus from frame 0 but its own rack holds 4.
        let mut board = board_with(&[5, 5, 6]);
        assert_eq!(board.frames()[0].score(), 16);
        assert!(board.would_accept(4));
        assert!(!board.would_accept(5));
        assert!(board.record_roll(4).accepted);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = Board::new();
        assert_eq!(board.check_roll(-1), Err(RollError::OutOfRange(-1)));
        assert_eq!(board.check_roll(11), Err(RollError::OutOfRange(11)));
        assert!(!board.record_roll(300).accepted);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_accepted_values_follow_standing_pins() {
        let board = board_with(&[7]);
        assert_eq!(board.accepted_values(), vec![0, 1, 2, 3]);
        assert_eq!(Board::new().accepted_values().len(), 11);
    }

    #[test]
    fn test_tenth_frame_strike_earns_two_fill_balls() {
        let mut values = vec![0; 18];
        values.extend([10, 4]);
        let mut board = board_with(&values);
        assert_eq!(board.active_frame_index(), LAST_FRAME);
        assert!(!board.would_accept(7));

        let outcome = board.record_roll(3);
        assert!(outcome.game_complete);
        assert_eq!(board.frames()[LAST_FRAME].score(), 17);
        assert_eq!(board.check_roll(0), Err(RollError::FrameClosed));
    }

    #[test]
    fn test_tenth_frame_open_closes_after_two() {
        let mut values = vec![0; 18];
        values.push(3);
        let mut board = board_with(&values);
        let outcome = board.record_roll(4);
        assert!(outcome.game_complete);
        assert!(!outcome.frame_advanced);
        assert!(board.is_complete());
        assert!(!board.record_roll(0).accepted);
    }

    #[test]
    fn test_tenth_frame_spare_resets_rack() {
        let mut values = vec![0; 18];
        values.extend([6, 4]);
        let mut board = board_with(&values);
        assert!(board.would_accept(10));
        let outcome = board.record_roll(10);
        assert!(outcome.game_complete);
        assert_eq!(board.frames()[LAST_FRAME].score(), 20);
        assert!(board.pending_credits().is_empty());
    }

    #[test]
    fn test_ninth_frame_strike_takes_tenth_frame_rolls() {
        let mut values = vec![0; 16];
        values.extend([10, 10, 10, 10]);
        let board = board_with(&values);
        assert_eq!(board.frames()[8].score(), 30);
        assert_eq!(board.frames()[LAST_FRAME].score(), 30);
        assert_eq!(board.total_score(), 60);
    }

    #[test]
    fn test_running_totals() {
        let board = board_with(&[10, 3, 4, 5, 5]);
        let totals = board.running_totals();
        assert_eq!(totals[0], 17);
        assert_eq!(totals[1], 24);
        assert_eq!(totals[2], 34);
        assert_eq!(totals[LAST_FRAME], board.total_score());
    }
}
