//! Textual board and report rendering.
//!
//! Built entirely on the model's read accessors; givens are marked with `*`
//! and blanks drawn as `.`, with separators on region boundaries.

use gridlock_core::Board;
use gridlock_game::{Session, UnitReport};

/// Renders the board as a text grid with region separators.
pub(crate) fn board(board: &Board) -> String {
    let size = board.size();
    let width = size.to_string().len();
    let mut out = String::new();

    for r in 0..size {
        if r > 0 && r % board.rows() == 0 {
            out.push_str(&separator(board, width));
            out.push('\n');
        }
        let mut line = String::new();
        for c in 0..size {
            if c > 0 && c % board.columns() == 0 {
                line.push_str("| ");
            }
            let value = board.value(r, c).unwrap_or_default();
            let marker = if board.is_given(r, c).unwrap_or_default() {
                '*'
            } else {
                ' '
            };
            if value == 0 {
                line.push_str(&format!("{:>width$}  ", "."));
            } else {
                line.push_str(&format!("{value:>width$}{marker} "));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.pop();
    out
}

/// The horizontal line drawn between region bands.
fn separator(board: &Board, width: usize) -> String {
    let mut line = String::new();
    for c in 0..board.size() {
        if c > 0 && c % board.columns() == 0 {
            line.push_str("+-");
        }
        line.push_str(&"-".repeat(width + 2));
    }
    line
}

/// Renders the per-unit answer summary, one line per unit.
pub(crate) fn report(session: &Session) -> String {
    let mut out = String::new();
    for UnitReport { unit, state } in session.check_answers() {
        out.push_str(&format!("{unit}: {state}\n"));
    }
    out
}
