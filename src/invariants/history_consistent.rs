//! History consistency invariant: replaying the history rebuilds the board.

use super::Invariant;
use crate::session::RoundInProgress;
use crate::types::{Board, Square};
use tracing::warn;

/// Invariant: the move history reconstructs the board exactly.
///
/// Each recorded move must land on a then-empty cell, and the board
/// built by replaying the history must match the live board. Squares
/// are never overwritten once set.
pub struct HistoryConsistent;

impl Invariant<RoundInProgress> for HistoryConsistent {
    fn holds(round: &RoundInProgress) -> bool {
        let mut reconstructed = Board::new();

        for action in round.history() {
            if reconstructed.get(action.cell) != Square::Empty {
                warn!(cell = %action.cell, "history replays onto an occupied cell");
                return false;
            }
            reconstructed.set(action.cell, Square::Owned(action.mark));
        }

        let valid = reconstructed == *round.board();
        if !valid {
            warn!("replayed history does not match live board");
        }
        valid
    }

    fn description() -> &'static str {
        "Replaying the move history reconstructs the board exactly"
    }
}
