//! Plain-text rendering of tapes and transition tables.

use std::fmt::Write;
use turing_sim::{State, TapeSnapshot};

/// Renders the tape as a row of cells with a `^` marker under the head.
///
/// ```text
/// | a | a |   | b |
///           ^
/// ```
pub fn render_tape(snapshot: &TapeSnapshot) -> String {
    let mut row = String::from("|");
    let mut marker = 0;

    for (i, cell) in snapshot.cells.iter().enumerate() {
        if i == snapshot.head {
            marker = row.chars().count() + 1;
        }
        let _ = write!(row, " {} |", cell);
    }

    format!("{}\n{}^", row, " ".repeat(marker))
}

/// Renders a state's transition table, one rule per line, ordered by read symbol.
pub fn render_transitions(state: &State) -> String {
    let mut out = format!("Transitions of {}:", state.name());
    for t in state.transitions() {
        let _ = write!(
            out,
            "\n  On '{}': Write '{}', Move {}, Go to '{}'",
            t.read, t.write, t.direction, t.to
        );
    }
    out
}
