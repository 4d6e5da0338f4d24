//! Named board cells with index conversion.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board (index 0-8, row-major).
///
/// The grid layout is:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Using an enum instead of a raw index means every in-range cell is
/// representable and no out-of-range cell is. Range checking happens
/// once, at [`Cell::from_index`], and nowhere else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in ascending index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Creates a cell from a board index.
    ///
    /// Returns `None` if the index is out of range.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Cell::ALL.get(index).copied()
    }

    /// Display label for this cell.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Returns the empty cells of the board in ascending index order.
    ///
    /// Drives both search branching and the external caller's notion
    /// of which cells accept a move. The ascending order is load-bearing:
    /// the search breaks score ties by first occurrence.
    #[instrument(skip(board))]
    pub fn open(board: &Board) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
