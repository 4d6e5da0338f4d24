//! Exhaustive minimax search for the computer's move.
//!
//! The search explores the entire game tree with no pruning and no
//! depth limit. That is sound only because the board has 9 cells and
//! every recursion level strictly reduces the number of empty
//! squares; a parameterized grid would need depth limiting or
//! alpha-beta pruning, which is out of scope here.

use crate::cell::Cell;
use crate::error::SearchError;
use crate::outcome::evaluate;
use crate::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// Result of evaluating a position.
///
/// The score and the move that achieves it are threaded back up the
/// call stack together, so no recursion level depends on shared
/// mutable best-move state. `best` is `None` exactly when the
/// position is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Minimax score in {-10, 0, +10} under optimal play.
    pub score: i32,
    /// The move at this level that achieves the score.
    pub best: Option<Cell>,
}

/// Evaluates the board for the side to move, assuming optimal play.
///
/// Candidate moves are placed on the board transiently: each open
/// cell receives the current side's mark, the child position is
/// evaluated for the opponent, and the cell is restored to empty
/// before the next candidate. The board is left exactly as found.
///
/// The maximizing side (`Computer`) keeps the strictly highest child
/// score, the minimizing side (`Human`) the strictly lowest; ties
/// break to the first cell in ascending index order.
pub fn minimax(board: &mut Board, to_move: Mark) -> Evaluation {
    if let Some(score) = evaluate(board).score() {
        return Evaluation { score, best: None };
    }

    let mut best: Option<Evaluation> = None;
    for cell in Cell::open(board) {
        board.set(cell, Square::Owned(to_move));
        let child = minimax(board, to_move.opponent());
        board.set(cell, Square::Empty);

        let better = match best {
            None => true,
            Some(current) => match to_move {
                Mark::Computer => child.score > current.score,
                Mark::Human => child.score < current.score,
            },
        };
        if better {
            best = Some(Evaluation {
                score: child.score,
                best: Some(cell),
            });
        }
    }

    // A non-terminal board always has an open cell: evaluate() reports
    // every full board as terminal.
    best.expect("non-terminal board has at least one open cell")
}

/// Determines the computer's optimal move for the given board.
///
/// The caller's board is never touched; the search runs on a scratch
/// copy with the transient place-then-restore discipline of
/// [`minimax`].
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is terminal,
/// so no move can be selected. Under the board invariants this cannot
/// be reached from legal play; it marks a caller logic fault.
#[instrument(skip(board))]
pub fn choose_computer_move(board: &Board) -> Result<Cell, SearchError> {
    if evaluate(board).is_terminal() {
        return Err(SearchError::NoMoveAvailable);
    }

    let mut scratch = board.clone();
    let result = minimax(&mut scratch, Mark::Computer);
    debug_assert_eq!(scratch, *board, "search must restore the board");

    let cell = result
        .best
        .ok_or(SearchError::NoMoveAvailable)?;
    debug!(cell = %cell, score = result.score, "computer move chosen");
    Ok(cell)
}
