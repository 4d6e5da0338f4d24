//! Serializable snapshots of round phases.

use crate::cell::Cell;
use crate::outcome::Outcome;
use crate::session::{IconAssignment, Move, RoundInProgress, RoundOver, RoundSetup, RoundTransition};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Serializable view of a round in any phase.
///
/// Typestate phases can't be serialized directly, so external
/// consumers (the CLI's JSON output, a UI layer) get this enum
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundState {
    /// Round not yet started.
    Setup {
        /// The icon assignment.
        icons: IconAssignment,
    },
    /// Round accepting moves.
    InProgress {
        /// The board state.
        board: Board,
        /// The icon assignment.
        icons: IconAssignment,
        /// Side to move.
        to_move: Mark,
        /// Moves played so far.
        history: Vec<Move>,
    },
    /// Round finished.
    Over {
        /// The board state.
        board: Board,
        /// The icon assignment.
        icons: IconAssignment,
        /// Terminal outcome from the maximizing perspective.
        outcome: Outcome,
        /// Decided line, when the round ended in a line win.
        winning_line: Option<[Cell; 3]>,
        /// Moves played.
        history: Vec<Move>,
    },
}

impl From<&RoundSetup> for RoundState {
    fn from(round: &RoundSetup) -> Self {
        RoundState::Setup {
            icons: *round.icons(),
        }
    }
}

impl From<&RoundInProgress> for RoundState {
    fn from(round: &RoundInProgress) -> Self {
        RoundState::InProgress {
            board: round.board().clone(),
            icons: *round.icons(),
            to_move: round.to_move(),
            history: round.history().to_vec(),
        }
    }
}

impl From<&RoundOver> for RoundState {
    fn from(round: &RoundOver) -> Self {
        RoundState::Over {
            board: round.board().clone(),
            icons: *round.icons(),
            outcome: round.outcome(),
            winning_line: round.winning_line(),
            history: round.history().to_vec(),
        }
    }
}

impl From<&RoundTransition> for RoundState {
    fn from(transition: &RoundTransition) -> Self {
        match transition {
            RoundTransition::InProgress(round) => round.into(),
            RoundTransition::Over(round) => round.into(),
        }
    }
}

impl RoundState {
    /// Returns the board, if the round has one yet.
    pub fn board(&self) -> Option<&Board> {
        match self {
            RoundState::Setup { .. } => None,
            RoundState::InProgress { board, .. } => Some(board),
            RoundState::Over { board, .. } => Some(board),
        }
    }

    /// True once the round has finished.
    pub fn is_over(&self) -> bool {
        matches!(self, RoundState::Over { .. })
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        match self {
            RoundState::Setup { .. } => "Ready to start".to_string(),
            RoundState::InProgress { to_move, .. } => {
                format!("In progress. {to_move:?} to move.")
            }
            RoundState::Over { outcome, .. } => format!("Game over. {outcome}."),
        }
    }
}
