//! Engine error types.

use derive_more::{Display, Error};

/// Caller supplied a board index outside the nine-square grid.
///
/// Adapters derive indices from real board positions, so an off-grid
/// index means a bug in the caller, not a normal game condition. The
/// engine never recovers or defaults it; the error propagates as-is.
/// An occupied square is deliberately NOT an error (see
/// [`Board::claim`](crate::Board::claim)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid board index {}: expected 0-8", index)]
pub struct InvalidIndex {
    /// The out-of-range index the caller supplied.
    pub index: usize,
}
