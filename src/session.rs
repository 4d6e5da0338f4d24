//! Round lifecycle as a typestate machine, plus icon assignment and
//! scorekeeping across rounds.
//!
//! Each phase is its own type: a [`RoundSetup`] becomes a
//! [`RoundInProgress`], which consumes itself on every move and
//! transitions either back to in-progress or to [`RoundOver`]. A
//! finished round cannot accept moves - there is no method for it.

use crate::cell::Cell;
use crate::error::{IllegalMoveError, RoundError};
use crate::invariants::assert_round_invariants;
use crate::outcome::{Outcome, evaluate, winning_line};
use crate::search::choose_computer_move;
use crate::types::{Board, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Icons
// ─────────────────────────────────────────────────────────────

/// A display icon, assigned to one side per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    /// The X icon.
    X,
    /// The O icon.
    O,
}

impl Icon {
    /// Returns the other icon.
    pub fn other(self) -> Self {
        match self {
            Icon::X => Icon::O,
            Icon::O => Icon::X,
        }
    }

    /// Single-character rendering.
    pub fn as_char(self) -> char {
        match self {
            Icon::X => 'X',
            Icon::O => 'O',
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which icon each side plays, chosen once at session start.
///
/// Purely presentational: the search and evaluator work on the
/// numeric mark encoding and never consult icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct IconAssignment {
    /// Icon the human plays.
    human: Icon,
    /// Icon the computer plays.
    computer: Icon,
}

impl IconAssignment {
    /// Assigns the chosen icon to the human and the other to the computer.
    pub fn with_human(icon: Icon) -> Self {
        Self {
            human: icon,
            computer: icon.other(),
        }
    }

    /// Returns the icon for a mark.
    pub fn icon_for(&self, mark: Mark) -> Icon {
        match mark {
            Mark::Human => self.human,
            Mark::Computer => self.computer,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

/// A move: a side placing its mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// Where the mark is placed.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.cell)
    }
}

// ─────────────────────────────────────────────────────────────
//  Scoreboard
// ─────────────────────────────────────────────────────────────

/// Win and draw counters across rounds, keyed by icon.
///
/// The counters survive round restarts but not the process - there is
/// no persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by whichever side played X.
    x_wins: u32,
    /// Rounds won by whichever side played O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a terminal outcome, mapping it through the icon assignment.
    ///
    /// Non-terminal outcomes are ignored with a warning.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, icons: &IconAssignment) {
        match outcome {
            Outcome::Win => self.bump(icons.computer),
            Outcome::Lose => self.bump(icons.human),
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => warn!("ignoring non-terminal outcome"),
        }
    }

    fn bump(&mut self, icon: Icon) {
        match icon {
            Icon::X => self.x_wins += 1,
            Icon::O => self.o_wins += 1,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// A round ready to start: icons assigned, board not yet created.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    icons: IconAssignment,
}

impl RoundSetup {
    /// Creates a round with the given icon assignment.
    pub fn new(icons: IconAssignment) -> Self {
        Self { icons }
    }

    /// Returns the icon assignment.
    pub fn icons(&self) -> &IconAssignment {
        &self.icons
    }

    /// Starts the round with a fresh, empty board.
    ///
    /// The human always moves first.
    #[instrument(skip(self))]
    pub fn start(self) -> RoundInProgress {
        RoundInProgress {
            board: Board::new(),
            icons: self.icons,
            to_move: Mark::Human,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// A round accepting moves.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) icons: IconAssignment,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
}

/// Result of applying a move: the round continues or is over.
#[derive(Debug)]
pub enum RoundTransition {
    /// The round continues with the opposing side to move.
    InProgress(RoundInProgress),
    /// The round reached a terminal outcome.
    Over(RoundOver),
}

impl RoundInProgress {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the icon assignment.
    pub fn icons(&self) -> &IconAssignment {
        &self.icons
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cells that currently accept a move.
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::open(&self.board)
    }

    /// Applies a move, consuming the round and returning the next phase.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::OutOfTurn`] if the move's side is not to move.
    /// - [`IllegalMoveError::Occupied`] if the cell already holds a mark.
    ///
    /// A rejected move leaves no trace: the board is never partially
    /// mutated.
    #[instrument(skip(self), fields(cell = %action.cell, mark = ?action.mark))]
    pub fn make_move(self, action: Move) -> Result<RoundTransition, IllegalMoveError> {
        if action.mark != self.to_move {
            return Err(IllegalMoveError::OutOfTurn(action.mark));
        }

        let mut round = self;
        round.board.apply_move(action.cell.index(), action.mark)?;
        round.history.push(action);

        let outcome = evaluate(&round.board);
        if outcome.is_terminal() {
            debug!(%outcome, "round finished");
            return Ok(RoundTransition::Over(RoundOver {
                winning_line: winning_line(&round.board),
                board: round.board,
                icons: round.icons,
                outcome,
                history: round.history,
            }));
        }

        round.to_move = round.to_move.opponent();
        assert_round_invariants(&round);
        Ok(RoundTransition::InProgress(round))
    }

    /// Runs the search and applies the computer's optimal reply.
    ///
    /// # Errors
    ///
    /// - [`RoundError::Illegal`] with `OutOfTurn` if it is the human's turn.
    /// - [`RoundError::Search`] if no move is selectable, which cannot
    ///   happen on an in-progress round and marks a logic fault.
    #[instrument(skip(self))]
    pub fn computer_turn(self) -> Result<RoundTransition, RoundError> {
        if self.to_move != Mark::Computer {
            return Err(IllegalMoveError::OutOfTurn(Mark::Computer).into());
        }
        let cell = choose_computer_move(&self.board)?;
        let transition = self.make_move(Move::new(Mark::Computer, cell))?;
        Ok(transition)
    }

    /// Renders the board with session icons; empty cells show their index.
    pub fn render(&self) -> String {
        render_board(&self.board, &self.icons)
    }
}

// ─────────────────────────────────────────────────────────────
//  Over Phase
// ─────────────────────────────────────────────────────────────

/// A finished round. The outcome is always present, never `Option`.
#[derive(Debug, Clone)]
pub struct RoundOver {
    board: Board,
    icons: IconAssignment,
    outcome: Outcome,
    winning_line: Option<[Cell; 3]>,
    history: Vec<Move>,
}

impl RoundOver {
    /// Returns the terminal outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the decided line for highlighting, if the round ended
    /// in a line win.
    pub fn winning_line(&self) -> Option<[Cell; 3]> {
        self.winning_line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the icon assignment.
    pub fn icons(&self) -> &IconAssignment {
        &self.icons
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards the terminal board and sets up a fresh round with the
    /// same icon assignment.
    #[instrument(skip(self))]
    pub fn rematch(self) -> RoundSetup {
        RoundSetup::new(self.icons)
    }

    /// Renders the final board with session icons.
    pub fn render(&self) -> String {
        render_board(&self.board, &self.icons)
    }
}

fn render_board(board: &Board, icons: &IconAssignment) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let cell = Cell::ALL[index];
            let symbol = match board.get(cell) {
                Square::Empty => char::from_digit(index as u32, 10).unwrap_or('.'),
                Square::Owned(mark) => icons.icon_for(mark).as_char(),
            };
            result.push(symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}
