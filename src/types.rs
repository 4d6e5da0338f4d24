//! Core domain types: marks, squares, and the board.

use crate::cell::Cell;
use crate::error::IllegalMoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An owner of a board cell.
///
/// The search is perspective-fixed: `Computer` is always the
/// maximizing side and `Human` the minimizing side, regardless of
/// which icon either one plays in a given session. The numeric
/// encoding, not the icon assignment, determines semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The computer - maximizing side, encoded as +1.
    Computer,
    /// The human - minimizing side, encoded as -1. Moves first.
    Human,
}

impl Mark {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Computer => Mark::Human,
            Mark::Human => Mark::Computer,
        }
    }

    /// Numeric encoding of the mark: +1 for computer, -1 for human.
    ///
    /// Doubles as score polarity - a line summing to +3 is a win for
    /// the maximizing side.
    pub fn value(self) -> i8 {
        match self {
            Mark::Computer => 1,
            Mark::Human => -1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Owned(Mark),
}

impl Square {
    /// Numeric encoding: 0 when empty, otherwise the owner's value.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Owned(mark) => mark.value(),
        }
    }
}

/// 3x3 tic-tac-toe board, squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new board with all squares empty.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Overwrites the square at the given cell.
    ///
    /// Infallible by construction - a [`Cell`] is always in range.
    /// The search relies on this to place and then un-place marks
    /// during tree exploration; validated placement goes through
    /// [`Board::apply_move`].
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks whether the square at the given cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Checks whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn filled_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares owned by the given mark.
    pub fn count_of(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Owned(mark))
            .count()
    }

    /// All squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Validated move application at the external boundary.
    ///
    /// Takes a raw index so the caller never has to pre-validate.
    /// Fails without mutating the board if the index is out of range
    /// or the cell is occupied.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::OutOfBounds`] if `index` is not in 0-8.
    /// - [`IllegalMoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Cell, IllegalMoveError> {
        let cell = Cell::from_index(index).ok_or(IllegalMoveError::OutOfBounds(index))?;
        if !self.is_empty(cell) {
            return Err(IllegalMoveError::Occupied(cell));
        }
        self.set(cell, Square::Owned(mark));
        Ok(cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(Cell::ALL.iter().all(|c| board.is_empty(*c)));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_apply_move_places_mark() {
        let mut board = Board::new();
        let cell = board.apply_move(4, Mark::Human).expect("legal move");
        assert_eq!(cell, Cell::Center);
        assert_eq!(board.get(Cell::Center), Square::Owned(Mark::Human));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.apply_move(9, Mark::Human),
            Err(IllegalMoveError::OutOfBounds(9))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_occupied() {
        let mut board = Board::new();
        board.apply_move(0, Mark::Human).expect("legal move");
        let before = board.clone();
        assert_eq!(
            board.apply_move(0, Mark::Computer),
            Err(IllegalMoveError::Occupied(Cell::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_square_encoding() {
        assert_eq!(Square::Empty.value(), 0);
        assert_eq!(Square::Owned(Mark::Computer).value(), 1);
        assert_eq!(Square::Owned(Mark::Human).value(), -1);
    }
}
