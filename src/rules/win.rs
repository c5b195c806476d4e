//! Win detection.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals. The first completed
/// line decides the reported winner, which keeps the result
/// deterministic even for boards holding a line for each mark.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark holds three in a row, `None`
/// otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        if let Square::Taken(mark) = squares[a] {
            if squares[b] == squares[a] && squares[c] == squares[a] {
                return Some(mark);
            }
        }
    }
    None
}
