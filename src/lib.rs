//! Perfect-play tic-tac-toe engine.
//!
//! The decision core is an exhaustive minimax search over the 9-cell
//! board-state space, backed by arithmetic victory/draw detection.
//! Presentation (rendering, input handling, transitions between
//! turns) is an external collaborator that reports the human's cell,
//! asks the engine for the computer's reply, and displays the
//! terminal outcome.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`] over named [`Cell`]s, with a signed
//!   numeric square encoding (+1 computer, -1 human, 0 empty).
//! - **Outcome evaluation**: [`evaluate`] classifies a board by
//!   summing square values along the 8 winning lines, from the fixed
//!   maximizing perspective.
//! - **Search**: [`choose_computer_move`] explores every reachable
//!   state with [`minimax`], placing and un-placing marks transiently.
//! - **Session**: typestate round lifecycle with icon assignment and
//!   a cross-round [`Scoreboard`].
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{
//!     Icon, IconAssignment, Mark, Move, Cell, RoundSetup, RoundTransition,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let icons = IconAssignment::with_human(Icon::X);
//! let round = RoundSetup::new(icons).start();
//!
//! // Human opens in the center; the engine answers optimally.
//! let round = match round.make_move(Move::new(Mark::Human, Cell::Center))? {
//!     RoundTransition::InProgress(round) => round,
//!     RoundTransition::Over(_) => unreachable!("one move cannot end a round"),
//! };
//! let _transition = round.computer_turn()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod invariants;
mod outcome;
mod search;
mod session;
mod snapshot;
mod types;

// Crate-level exports - board state
pub use cell::Cell;
pub use types::{Board, Mark, Square};

// Crate-level exports - outcome evaluation
pub use outcome::{Outcome, WINNING_LINES, evaluate, winning_line};

// Crate-level exports - search
pub use search::{Evaluation, choose_computer_move, minimax};

// Crate-level exports - errors
pub use error::{IllegalMoveError, RoundError, SearchError};

// Crate-level exports - session and scorekeeping
pub use session::{
    Icon, IconAssignment, Move, RoundInProgress, RoundOver, RoundSetup, RoundTransition, Scoreboard,
};
pub use snapshot::RoundState;

// Crate-level exports - invariants
pub use invariants::{
    BalancedMarks, CellConservation, HistoryConsistent, Invariant, InvariantSet,
    InvariantViolation, RoundInvariants,
};
