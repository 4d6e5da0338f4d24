//! Tests for the round lifecycle and scorekeeping.

use perfect_tictactoe::{
    Cell, Icon, IconAssignment, IllegalMoveError, Mark, Move, Outcome, RoundInProgress, RoundOver,
    RoundSetup, RoundState, RoundTransition, Scoreboard,
};

fn new_round(icon: Icon) -> RoundInProgress {
    RoundSetup::new(IconAssignment::with_human(icon)).start()
}

fn advance(round: RoundInProgress, mark: Mark, cell: Cell) -> RoundInProgress {
    match round.make_move(Move::new(mark, cell)) {
        Ok(RoundTransition::InProgress(next)) => next,
        Ok(RoundTransition::Over(_)) => panic!("round ended early"),
        Err(e) => panic!("move rejected: {e}"),
    }
}

fn finish(round: RoundInProgress, mark: Mark, cell: Cell) -> RoundOver {
    match round.make_move(Move::new(mark, cell)) {
        Ok(RoundTransition::Over(over)) => over,
        Ok(RoundTransition::InProgress(_)) => panic!("round should have ended"),
        Err(e) => panic!("move rejected: {e}"),
    }
}

#[test]
fn test_round_lifecycle() {
    let round = new_round(Icon::X);
    assert_eq!(round.to_move(), Mark::Human);

    let round = advance(round, Mark::Human, Cell::Center);
    assert_eq!(round.to_move(), Mark::Computer);
    assert_eq!(round.history().len(), 1);
}

#[test]
fn test_occupied_cell_rejected() {
    let round = new_round(Icon::X);
    let round = advance(round, Mark::Human, Cell::Center);

    let result = round.make_move(Move::new(Mark::Computer, Cell::Center));
    assert!(matches!(
        result,
        Err(IllegalMoveError::Occupied(Cell::Center))
    ));
}

#[test]
fn test_out_of_turn_rejected() {
    let round = new_round(Icon::X);
    let result = round.make_move(Move::new(Mark::Computer, Cell::Center));
    assert!(matches!(
        result,
        Err(IllegalMoveError::OutOfTurn(Mark::Computer))
    ));
}

#[test]
fn test_human_line_ends_round_with_lose() {
    // Scripted (non-optimal) computer replies let the human win the
    // left column; the perspective-fixed outcome is Lose.
    let round = new_round(Icon::X);
    let round = advance(round, Mark::Human, Cell::TopLeft);
    let round = advance(round, Mark::Computer, Cell::TopCenter);
    let round = advance(round, Mark::Human, Cell::MiddleLeft);
    let round = advance(round, Mark::Computer, Cell::Center);
    let over = finish(round, Mark::Human, Cell::BottomLeft);

    assert_eq!(over.outcome(), Outcome::Lose);
    assert_eq!(
        over.winning_line(),
        Some([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft])
    );
}

#[test]
fn test_computer_turn_plays_the_search_move() {
    // Human threatens the top row; the engine must block at index 2.
    let round = new_round(Icon::O);
    let round = advance(round, Mark::Human, Cell::TopLeft);
    let round = advance(round, Mark::Computer, Cell::MiddleLeft);
    let round = advance(round, Mark::Human, Cell::TopCenter);

    let round = match round.computer_turn() {
        Ok(RoundTransition::InProgress(next)) => next,
        other => panic!("unexpected transition: {other:?}"),
    };

    let reply = round.history().last().expect("computer moved");
    assert_eq!(reply.mark, Mark::Computer);
    assert_eq!(reply.cell, Cell::TopRight);
}

#[test]
fn test_computer_turn_out_of_turn_is_rejected() {
    let round = new_round(Icon::X);
    assert!(round.computer_turn().is_err());
}

#[test]
fn test_full_round_against_engine_never_loses() {
    // The human plays the first open cell every turn; the perfect-play
    // engine must never lose (Outcome::Lose cannot occur).
    let mut round = new_round(Icon::X);

    let over = loop {
        let cell = round.open_cells()[0];
        round = match round.make_move(Move::new(Mark::Human, cell)) {
            Ok(RoundTransition::InProgress(next)) => next,
            Ok(RoundTransition::Over(over)) => break over,
            Err(e) => panic!("move rejected: {e}"),
        };
        round = match round.computer_turn() {
            Ok(RoundTransition::InProgress(next)) => next,
            Ok(RoundTransition::Over(over)) => break over,
            Err(e) => panic!("computer turn failed: {e}"),
        };
    };

    assert_ne!(over.outcome(), Outcome::Lose);
}

#[test]
fn test_rematch_keeps_icons_and_clears_board() {
    let round = new_round(Icon::O);
    let round = advance(round, Mark::Human, Cell::TopLeft);
    let round = advance(round, Mark::Computer, Cell::TopCenter);
    let round = advance(round, Mark::Human, Cell::MiddleLeft);
    let round = advance(round, Mark::Computer, Cell::Center);
    let over = finish(round, Mark::Human, Cell::BottomLeft);

    let icons_before = *over.icons();
    let fresh = over.rematch().start();

    assert_eq!(*fresh.icons(), icons_before);
    assert_eq!(fresh.open_cells().len(), 9);
    assert_eq!(fresh.to_move(), Mark::Human);
    assert!(fresh.history().is_empty());
}

#[test]
fn test_scoreboard_tallies_across_rounds() {
    let icons = IconAssignment::with_human(Icon::X);
    let mut scoreboard = Scoreboard::new();

    scoreboard.record(Outcome::Win, &icons); // computer plays O
    scoreboard.record(Outcome::Win, &icons);
    scoreboard.record(Outcome::Lose, &icons); // human plays X
    scoreboard.record(Outcome::Draw, &icons);

    assert_eq!(*scoreboard.o_wins(), 2);
    assert_eq!(*scoreboard.x_wins(), 1);
    assert_eq!(*scoreboard.draws(), 1);
}

#[test]
fn test_snapshot_reflects_finished_round() {
    let round = new_round(Icon::X);
    let round = advance(round, Mark::Human, Cell::TopLeft);
    let round = advance(round, Mark::Computer, Cell::Center);
    let round = advance(round, Mark::Human, Cell::MiddleLeft);
    let round = advance(round, Mark::Computer, Cell::TopRight);
    let over = finish(round, Mark::Human, Cell::BottomLeft);

    let state = RoundState::from(&over);
    assert!(state.is_over());
    assert_eq!(state.status_string(), "Game over. Human wins.");

    let json = serde_json::to_string(&state).expect("serializes");
    assert!(json.contains("Over"));
}
