//! Perfect-play tic-tac-toe - terminal harness.
//!
//! A thin presentation layer over the engine: reads the human's cell
//! from stdin, asks the engine for the computer's reply, and displays
//! the terminal outcome.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    Board, Cell, Icon, IconAssignment, Mark, Move, Outcome, RoundOver, RoundSetup, RoundState,
    RoundTransition, Scoreboard, Square, evaluate, minimax,
};

use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { icon, json } => run_play(icon.into(), json),
        Command::Selfplay => run_selfplay(),
    }
}

/// Interactive rounds against the engine until the human quits.
fn run_play(icon: Icon, json: bool) -> Result<()> {
    let icons = IconAssignment::with_human(icon);
    let mut scoreboard = Scoreboard::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    info!(human = %icons.human(), computer = %icons.computer(), "session started");
    println!(
        "You play {}. The computer plays {}. You move first.",
        icons.human(),
        icons.computer()
    );

    loop {
        let over = run_round(RoundSetup::new(icons), json, &mut lines)?;
        let Some(over) = over else {
            // Human quit mid-round.
            return Ok(());
        };

        scoreboard.record(over.outcome(), over.icons());
        println!("{}", over.render());
        announce(&over);
        println!(
            "Score - X wins: {}, O wins: {}, draws: {}",
            scoreboard.x_wins(),
            scoreboard.o_wins(),
            scoreboard.draws()
        );

        if !prompt_yes_no("Play again? [y/n] ", &mut lines)? {
            return Ok(());
        }
    }
}

/// Plays one round; `None` means the human quit.
fn run_round(
    setup: RoundSetup,
    json: bool,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<Option<RoundOver>> {
    let mut round = setup.start();

    loop {
        println!("\n{}\n", round.render());

        // Human turn: re-prompt until a legal cell comes in.
        let transition = loop {
            let Some(input) = prompt("Your move (0-8, q to quit): ", lines)? else {
                return Ok(None);
            };
            let Ok(index) = input.parse::<usize>() else {
                println!("Enter a cell index between 0 and 8.");
                continue;
            };
            let Some(cell) = Cell::from_index(index) else {
                println!("Index {index} is out of range (must be 0-8).");
                continue;
            };
            match round.clone().make_move(Move::new(Mark::Human, cell)) {
                Ok(transition) => break transition,
                Err(e) => println!("{e}"),
            }
        };
        if json {
            println!("{}", serde_json::to_string_pretty(&RoundState::from(&transition))?);
        }

        round = match transition {
            RoundTransition::InProgress(round) => round,
            RoundTransition::Over(over) => return Ok(Some(over)),
        };

        // Computer replies.
        let transition = round.computer_turn()?;
        if let RoundTransition::InProgress(next) = &transition {
            let reply = next.history().last().expect("computer just moved");
            println!("Computer plays {}.", reply.cell);
        }
        if json {
            println!("{}", serde_json::to_string_pretty(&RoundState::from(&transition))?);
        }

        round = match transition {
            RoundTransition::InProgress(round) => round,
            RoundTransition::Over(over) => return Ok(Some(over)),
        };
    }
}

/// Reports the outcome from the human's point of view.
fn announce(over: &RoundOver) {
    match over.outcome() {
        Outcome::Win => {
            println!("You lost.");
            if let Some(line) = over.winning_line() {
                let labels: Vec<_> = line.iter().map(|c| c.label()).collect();
                println!("Winning line: {}", labels.join(", "));
            }
        }
        Outcome::Lose => println!("You won!"),
        Outcome::Draw => println!("It's a draw."),
        Outcome::InProgress => unreachable!("finished round has a terminal outcome"),
    }
}

/// Optimal play for both sides from the empty board.
///
/// Perfect-play tic-tac-toe is a draw; this demonstrates it.
fn run_selfplay() -> Result<()> {
    let mut board = Board::new();
    let mut to_move = Mark::Human;

    while !evaluate(&board).is_terminal() {
        let result = minimax(&mut board, to_move);
        let cell = result
            .best
            .expect("non-terminal board has a best move");
        debug!(?to_move, %cell, score = result.score, "optimal move");
        board.set(cell, Square::Owned(to_move));
        println!("{:?} plays {} (score {})", to_move, cell, result.score);
        to_move = to_move.opponent();
    }

    println!("\nFinal outcome: {}", evaluate(&board));
    Ok(())
}

/// Prints a prompt and reads one line; `None` on EOF or `q`.
fn prompt(
    text: &str,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;

    match lines.next() {
        None => Ok(None),
        Some(line) => {
            let line = line?.trim().to_string();
            if line.eq_ignore_ascii_case("q") {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
    }
}

fn prompt_yes_no(
    text: &str,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<bool> {
    match prompt(text, lines)? {
        Some(answer) => Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")),
        None => Ok(false),
    }
}
