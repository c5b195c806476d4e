//! Turn coordination: sequencing moves and latching the end of a round.

use crate::error::InvalidIndex;
use crate::player::Player;
use crate::rules::Outcome;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Verdict
// ─────────────────────────────────────────────────────────────

/// Terminal result of a round, with winner attribution.
///
/// Unlike the mark-level [`Outcome`] the board reports, a verdict
/// carries the full identity of the winner so an adapter can show the
/// display name without consulting the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The named player completed a line.
    Won(Player),
    /// The board filled with no line completed.
    Tie,
}

impl Verdict {
    /// Returns the winning player, if the round had one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Verdict::Won(player) => Some(player),
            Verdict::Tie => None,
        }
    }

    /// Returns true if the round ended in a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Verdict::Tie)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Won(player) => write!(f, "{} wins!", player.name()),
            Verdict::Tie => write!(f, "It's a tie!"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// Two-player turn coordinator.
///
/// Owns the board and the pair of players, accepts moves for whichever
/// player is active, and latches a [`Verdict`] once the round ends.
/// Every game is an independent value; build as many as you need and
/// start a fresh round with [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board this game mutates.
    board: Board,
    /// The two competitors, first mover first.
    players: [Player; 2],
    /// Index into `players` of the active player.
    active: usize,
    /// End-of-round latch; `None` while the round is live.
    verdict: Option<Verdict>,
}

impl Game {
    /// Creates a game between two named players.
    ///
    /// The first player takes [`Mark::X`] and moves first; the second
    /// takes [`Mark::O`]. Assigning marks here keeps them distinct by
    /// construction.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let players = [Player::new(first, Mark::X), Player::new(second, Mark::O)];
        info!(x = %players[0].name(), o = %players[1].name(), "starting new game");
        Self {
            board: Board::new(),
            players,
            active: 0,
            verdict: None,
        }
    }

    /// The board as the last completed move left it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose move is currently being accepted.
    ///
    /// After a terminal move this is still the player who made it, so an
    /// adapter can attribute the result from here as well as from the
    /// verdict.
    pub fn current_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// The latched end-of-round result, `None` while the round is live.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Checks if the current round has ended.
    pub fn is_over(&self) -> bool {
        self.verdict.is_some()
    }

    /// Attempts a move for the active player at `index` (0-8, row-major).
    ///
    /// Returns `Ok(Some(verdict))` when the move ends the round. Every
    /// other accepted call returns `Ok(None)`: the round continues and
    /// the turn passes, the square was occupied and the turn holds, or
    /// the round was already over and nothing happens. The occupied and
    /// already-over cases are expected caller conditions, not faults.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidIndex`] for an off-grid index; board and turn
    /// state are left unchanged.
    #[instrument(skip(self), fields(player = %self.current_player().name(), mark = %self.current_player().mark()))]
    pub fn attempt_move(&mut self, index: usize) -> Result<Option<Verdict>, InvalidIndex> {
        if self.is_over() {
            debug!(index, "round already over, move ignored");
            return Ok(None);
        }

        let mark = *self.current_player().mark();
        if !self.board.claim(index, mark)? {
            debug!(index, "square occupied, move rejected");
            return Ok(None);
        }

        match self.board.outcome() {
            Some(Outcome::Won(_)) => {
                // Only the mover's mark can have completed a line.
                let verdict = Verdict::Won(self.current_player().clone());
                info!(winner = %self.current_player().name(), "round won");
                self.verdict = Some(verdict.clone());
                Ok(Some(verdict))
            }
            Some(Outcome::Tie) => {
                info!("round tied");
                self.verdict = Some(Verdict::Tie);
                Ok(Some(Verdict::Tie))
            }
            None => {
                self.active = 1 - self.active;
                debug!(next = %self.current_player().name(), "turn passes");
                Ok(None)
            }
        }
    }

    /// Starts a fresh round from any state.
    ///
    /// Clears the board and the verdict latch and hands the turn back to
    /// the first player, all within one `&mut self` call so no caller
    /// observes a half-reset game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting game");
        self.board.reset();
        self.active = 0;
        self.verdict = None;
    }

    /// Turn label for the presentation layer, e.g. `"Player 1's turn"`.
    pub fn turn_banner(&self) -> String {
        format!("{}'s turn", self.current_player().name())
    }
}

impl Default for Game {
    /// A game with the stock player names.
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
