use std::io;

use anyhow::Context;
use clap::Parser;
use rookery::chess::board::Board;
use rookery::{Engine, Settings};
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal: type moves as `<from>|<to>` (e.g. `e2|e4`),
/// `eval`, `check` or `moves <square>`. An empty line ends the session.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Only accept legal moves.
    #[arg(long)]
    strict: bool,
    /// Start with an empty board.
    #[arg(long, conflicts_with = "position")]
    empty: bool,
    /// Start from a piece placement with an optional side to move, e.g.
    /// "4k3/8/8/8/8/8/8/4K2R w".
    #[arg(long, value_name = "PLACEMENT")]
    position: Option<String>,
    /// Do not print the board after every move.
    #[arg(long)]
    quiet: bool,
    /// Print build information on startup.
    #[arg(long)]
    info: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if args.info {
        rookery::print_engine_info();
    }

    let board = match (args.position.as_deref(), args.empty) {
        (Some(placement), _) => Board::from_placement(placement)
            .with_context(|| format!("parsing position \"{placement}\""))?,
        (None, true) => Board::new(),
        (None, false) => Board::starting(),
    };
    tracing::debug!(?args, "Starting session");

    let settings = Settings {
        strict: args.strict,
        quiet: args.quiet,
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(board, settings, &mut input, &mut output).run()
}
