//! Rule evaluation for the 3x3 grid.
//!
//! Pure functions over a [`Board`]; no turn state, no mutation. The
//! coordinator in [`crate::game`] consumes these after every move.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given mark holds a completed line.
    Won(Mark),
    /// The board is full with no line completed.
    Tie,
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round ended with the board full and no winner.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Evaluates a board.
///
/// `None` means the round is still open: no completed line and at least
/// one empty square.
#[instrument]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = check_winner(board) {
        Some(Outcome::Won(mark))
    } else if is_full(board) {
        Some(Outcome::Tie)
    } else {
        None
    }
}
