//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use perfect_tictactoe::Icon;

/// Perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds against the engine
    Play {
        /// Icon the human plays (the computer takes the other)
        #[arg(long, value_enum, default_value_t = IconArg::O)]
        icon: IconArg,

        /// Emit a JSON snapshot of the round after every move
        #[arg(long)]
        json: bool,
    },

    /// Play both sides optimally from the empty board
    Selfplay,
}

/// Icon choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IconArg {
    /// Play as X
    X,
    /// Play as O
    O,
}

impl From<IconArg> for Icon {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::X => Icon::X,
            IconArg::O => Icon::O,
        }
    }
}
