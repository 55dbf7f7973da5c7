//! Console rendering of the board.

use kudoku_core::{Board, Position};

/// Renders the board in the interactive console look: digits separated by
/// spaces, `| ` between 3-column groups, a 21-dash line between 3-row
/// groups, and blanks for empty cells.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for pos in Position::ALL {
        if pos.col() == 0 && pos.row() != 0 && pos.row() % 3 == 0 {
            out.push_str(&"-".repeat(21));
            out.push('\n');
        }
        if pos.col() != 0 && pos.col() % 3 == 0 {
            out.push_str("| ");
        }
        match board.get(pos) {
            Some(digit) => {
                out.push(char::from(b'0' + digit.value()));
                out.push(' ');
            }
            None => out.push_str("  "),
        }
        if pos.col() == 8 {
            out.push('\n');
        }
    }
    out
}
