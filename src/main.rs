#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mirror_puzzle::board::Board;
use mirror_puzzle::puzzles;
use mirror_puzzle::session::{Session, SessionEnd};

#[derive(Parser, Debug)]
#[command(name = "mirror-puzzle", version, about = "Steer the beam into the sink by moving mirrors")]
struct Args {
    /// Path (full or relative) to a text layout file. Uses the classic board if omitted.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "mirror_puzzle=trace").
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let board = match &args.file {
        Some(path) => Board::from_path(path),
        None => {
            println!("No input file. Using default board.");
            puzzles::classic().build()
        }
    };
    let board = match board {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error creating board: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(board, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(SessionEnd::Solved { .. }) => ExitCode::SUCCESS,
        Ok(SessionEnd::InputClosed) => {
            eprintln!("Input closed before the puzzle was solved.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
