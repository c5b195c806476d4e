//! Tic-tac-toe game-state engine.
//!
//! This crate owns the rules of a two-player tic-tac-toe round: the 3x3
//! board, move validation, win and tie detection, and turn sequencing.
//! Rendering and input wiring live in whatever embeds the engine; the
//! crate exposes the snapshots, identities, and verdicts such an adapter
//! needs and performs no I/O of its own.
//!
//! # Architecture
//!
//! - **Board**: the nine-square grid with claim and reset operations
//! - **Rules**: pure win/tie evaluation over a board
//! - **Player**: immutable competitor identity (name + mark)
//! - **Game**: the turn coordinator tying the above together
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::Game;
//!
//! let mut game = Game::new("Ada", "Grace");
//!
//! // Ada opens as X in the center; the round continues.
//! let verdict = game.attempt_move(4)?;
//! assert!(verdict.is_none());
//! assert_eq!(game.current_player().name(), "Grace");
//! # Ok::<(), tictactoe_engine::InvalidIndex>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod player;
mod rules;
mod types;

// Crate-level exports - errors
pub use error::InvalidIndex;

// Crate-level exports - turn coordination
pub use game::{Game, Verdict};

// Crate-level exports - player identity
pub use player::Player;

// Crate-level exports - rule evaluation
pub use rules::{check_winner, is_full, Outcome};

// Crate-level exports - board types
pub use types::{Board, Mark, Square};
