//! Core domain types: marks, squares, and the board.

use crate::error::InvalidIndex;
use crate::rules::{self, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Marker symbol identifying which player claimed a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (first mover).
    X,
    /// The O mark (second mover).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Square claimed by the given mark.
    Taken(Mark),
}

/// The 3x3 grid, indexed 0-8 in row-major order.
///
/// Row = index / 3, column = index % 3. Squares become occupied only
/// through [`Board::claim`] and return to empty only through
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Borrows the full grid in row-major order.
    ///
    /// The shared borrow is the read-only snapshot adapters render from;
    /// the grid cannot be mutated through it.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Gets the square at the given index, or `None` off the grid.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` is free to claim.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Clears all nine squares.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Places `mark` at `index` if the square is free.
    ///
    /// Returns `Ok(true)` on success. An already-taken square returns
    /// `Ok(false)` and leaves the board untouched; that is "pick another
    /// square" feedback for the caller, not a fault.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] when `index` is not in `0..9`. The board
    /// is left unchanged.
    #[instrument(skip(self))]
    pub fn claim(&mut self, index: usize, mark: Mark) -> Result<bool, InvalidIndex> {
        if index >= 9 {
            return Err(InvalidIndex { index });
        }
        if self.squares[index] != Square::Empty {
            debug!(index, "square already taken");
            return Ok(false);
        }
        self.squares[index] = Square::Taken(mark);
        Ok(true)
    }

    /// Evaluates the board: a winner, a tie, or `None` while squares
    /// remain in play.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Three `|`-separated rows with `.` for empty squares, for text
    /// adapters and test diagnostics.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Taken(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
