//! Error types at the engine boundary.
//!
//! Two kinds only: [`IllegalMoveError`] is recoverable and always
//! rejected before any board mutation; [`SearchError`] marks a
//! programming-logic fault that callers should not retry.

use crate::cell::Cell;
use crate::types::Mark;

/// A move rejected at the boundary.
///
/// A failed move never partially mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The index does not name a board cell.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Cell),

    /// The move was made out of turn order.
    #[display("It is not {:?}'s turn", _0)]
    OutOfTurn(Mark),
}

impl std::error::Error for IllegalMoveError {}

/// Search invoked on a board with no selectable move.
///
/// Unreachable under the board invariants (a full board is always
/// terminal), so this is a logic fault rather than a recoverable
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// No move can be selected from this board.
    #[display("Search invoked on a board with no available moves")]
    NoMoveAvailable,
}

impl std::error::Error for SearchError {}

/// Error from driving a round: either a rejected move or a search fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum RoundError {
    /// A move was rejected at the boundary.
    #[display("{}", _0)]
    Illegal(IllegalMoveError),

    /// The search could not produce a move.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for RoundError {}
