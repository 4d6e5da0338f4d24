//! Outcome evaluation over the numeric board encoding.
//!
//! Classification is perspective-fixed: [`Outcome::Win`] always means
//! the maximizing (+1) side owns a line, no matter which icon it
//! plays in the current session.

use crate::cell::Cell;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Enumerated once and shared by outcome detection and win
/// highlighting. Enumeration order is the tie-break order when more
/// than one line is decided.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Classification of a board from the maximizing perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The maximizing side (computer) owns a line.
    Win,
    /// The minimizing side (human) owns a line.
    Lose,
    /// Board full, no line owned.
    Draw,
    /// Moves remain and no line is owned.
    InProgress,
}

impl Outcome {
    /// True unless the game is still in progress.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Minimax score of a terminal outcome.
    ///
    /// Returns `None` while the game is in progress.
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::Win => Some(10),
            Outcome::Lose => Some(-10),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Computer wins"),
            Outcome::Lose => write!(f, "Human wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// Sum of the three square values on a line, in -3..=3.
fn line_total(board: &Board, line: &[Cell; 3]) -> i8 {
    line.iter().map(|cell| board.get(*cell).value()).sum()
}

/// Classifies the board.
///
/// For each winning line, sums the numeric square values: +3 means the
/// maximizing side owns the line, -3 the minimizing side. The first
/// decided line in [`WINNING_LINES`] order determines the result. If no
/// line is decided, a full board is a draw; otherwise play continues.
///
/// A single move can complete two lines for the same side, so multiple
/// decided lines may coexist. Lines decided for *both* sides cannot
/// occur in legal single-move play; that precondition is asserted
/// rather than given defined behavior.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    debug_assert!(
        {
            let totals: Vec<i8> = WINNING_LINES
                .iter()
                .map(|line| line_total(board, line))
                .filter(|t| t.abs() == 3)
                .collect();
            !(totals.contains(&3) && totals.contains(&-3))
        },
        "board has lines decided for both sides"
    );

    for line in &WINNING_LINES {
        match line_total(board, line) {
            3 => return Outcome::Win,
            -3 => return Outcome::Lose,
            _ => {}
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Returns the line responsible for a win or loss, for highlighting.
///
/// `None` when the outcome is not a line win (draw or in progress).
/// With multiple decided lines, returns the first in enumeration order,
/// consistent with [`evaluate`].
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Cell; 3]> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line_total(board, line).abs() == 3)
}
