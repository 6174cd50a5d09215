//! Terminal front end for the gridlock board model.
//!
//! # Design Notes
//! - Line-oriented REPL: enter the puzzle's givens, `play` to lock them,
//!   then fill cells until every unit reports complete.
//! - All rule checking lives in `gridlock-core`/`gridlock-game`; this crate
//!   only parses commands and prints boards and reports.

use std::process;

use clap::Parser;

use crate::app::App;

mod app;
mod render;

#[derive(Debug, Parser)]
#[command(name = "gridlock", version, about = "Variable-size sudoku in the terminal")]
struct Cli {
    /// Rows per region (the board side is rows * columns).
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Columns per region.
    #[arg(long, default_value_t = 3)]
    columns: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if cli.rows == 0 || cli.columns == 0 {
        eprintln!("Error: region dimensions must be at least 1x1");
        process::exit(1);
    }

    log::info!(
        "starting {}x{} board with {}x{} regions",
        cli.rows * cli.columns,
        cli.rows * cli.columns,
        cli.rows,
        cli.columns
    );
    let mut app = App::new(cli.rows, cli.columns);
    if let Err(err) = app.run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
