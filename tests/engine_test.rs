//! Tests for the evaluation and search core.

use perfect_tictactoe::{
    Board, Cell, Mark, Outcome, Square, choose_computer_move, evaluate, minimax, winning_line,
};

fn board_from(values: [i8; 9]) -> Board {
    let mut board = Board::new();
    for (i, v) in values.iter().enumerate() {
        let square = match v {
            1 => Square::Owned(Mark::Computer),
            -1 => Square::Owned(Mark::Human),
            _ => Square::Empty,
        };
        board.set(Cell::from_index(i).expect("index in range"), square);
    }
    board
}

#[test]
fn test_computer_completes_its_line() {
    // Computer owns 0,1; human owns 3,4. Index 2 completes the top row.
    let board = board_from([1, 1, 0, -1, -1, 0, 0, 0, 0]);

    let cell = choose_computer_move(&board).expect("moves available");
    assert_eq!(cell.index(), 2);

    let mut board = board;
    board.set(cell, Square::Owned(Mark::Computer));
    assert_eq!(evaluate(&board), Outcome::Win);
    assert_eq!(
        winning_line(&board),
        Some([Cell::TopLeft, Cell::TopCenter, Cell::TopRight])
    );
}

#[test]
fn test_computer_blocks_human_threat() {
    // Human owns 0,1 and wins at 2 on the next turn unless blocked.
    let board = board_from([-1, -1, 0, 1, 0, 0, 0, 0, 0]);

    let cell = choose_computer_move(&board).expect("moves available");
    assert_eq!(cell.index(), 2);
}

#[test]
fn test_chosen_cell_is_always_empty() {
    // Walk a full game with both sides choosing via search; every
    // chosen cell must be empty at the time it is chosen.
    let mut board = Board::new();
    let mut to_move = Mark::Human;

    while !evaluate(&board).is_terminal() {
        let cell = if to_move == Mark::Computer {
            choose_computer_move(&board).expect("moves available")
        } else {
            minimax(&mut board.clone(), Mark::Human)
                .best
                .expect("moves available")
        };
        assert!(board.is_empty(cell));
        board.set(cell, Square::Owned(to_move));
        to_move = to_move.opponent();
    }
}

#[test]
fn test_optimal_self_play_is_a_draw() {
    // Perfect-play tic-tac-toe is a known draw: alternating optimal
    // moves from the empty board must fill all 9 cells with no line.
    let mut board = Board::new();
    let mut to_move = Mark::Human;

    while !evaluate(&board).is_terminal() {
        let result = minimax(&mut board, to_move);
        let cell = result.best.expect("non-terminal board has a move");
        board.set(cell, Square::Owned(to_move));
        to_move = to_move.opponent();
    }

    assert_eq!(evaluate(&board), Outcome::Draw);
    assert_eq!(board.filled_count(), 9);
    assert_eq!(winning_line(&board), None);
}

#[test]
fn test_open_cells_and_filled_count_partition() {
    let mut board = Board::new();
    let mut to_move = Mark::Human;

    loop {
        assert_eq!(Cell::open(&board).len() + board.filled_count(), 9);
        if evaluate(&board).is_terminal() {
            break;
        }
        let cell = minimax(&mut board, to_move)
            .best
            .expect("non-terminal board has a move");
        board.set(cell, Square::Owned(to_move));
        to_move = to_move.opponent();
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = board_from([-1, 0, 1, 0, -1, 0, 0, 0, 0]);
    let before = board.clone();
    let outcome_before = evaluate(&board);

    let mut scratch = board.clone();
    minimax(&mut scratch, Mark::Computer);

    assert_eq!(scratch, before);
    assert_eq!(evaluate(&scratch), outcome_before);
}

#[test]
fn test_place_then_undo_restores_evaluation() {
    let mut board = board_from([-1, -1, 0, 1, 0, 0, 0, 0, 0]);
    let before = evaluate(&board);

    board.set(Cell::TopRight, Square::Owned(Mark::Computer));
    board.set(Cell::TopRight, Square::Empty);

    assert_eq!(evaluate(&board), before);
}

#[test]
fn test_one_empty_cell_draw_iff_no_line_completes() {
    // Filling the last cell yields Draw exactly when no line reaches
    // a magnitude-3 total.
    let mut drawish = board_from([-1, 1, -1, -1, 1, 1, 1, -1, 0]);
    assert_eq!(evaluate(&drawish), Outcome::InProgress);
    drawish.set(Cell::BottomRight, Square::Owned(Mark::Human));
    assert_eq!(evaluate(&drawish), Outcome::Draw);

    let mut losing = board_from([0, 1, 1, -1, -1, 1, -1, 1, -1]);
    assert_eq!(evaluate(&losing), Outcome::InProgress);
    losing.set(Cell::TopLeft, Square::Owned(Mark::Human));
    assert_eq!(evaluate(&losing), Outcome::Lose);
    assert_eq!(
        winning_line(&losing),
        Some([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft])
    );
}

#[test]
fn test_winning_line_none_for_draw_and_in_progress() {
    assert_eq!(winning_line(&Board::new()), None);

    let drawn = board_from([-1, 1, -1, -1, 1, 1, 1, -1, -1]);
    assert_eq!(evaluate(&drawn), Outcome::Draw);
    assert_eq!(winning_line(&drawn), None);
}

#[test]
fn test_apply_move_validates_at_the_boundary() {
    let mut board = Board::new();

    assert!(board.apply_move(4, Mark::Human).is_ok());
    assert!(board.apply_move(4, Mark::Computer).is_err());
    assert!(board.apply_move(9, Mark::Computer).is_err());

    // Failed applications never partially mutate the board.
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(Cell::Center), Square::Owned(Mark::Human));
}
