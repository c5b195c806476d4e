//! Player identity.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One of the two competitors: a display name bound to a mark.
///
/// Identity is a value: two records are the same player exactly when
/// name and mark agree. Instances never mutate after construction; the
/// coordinator and any adapter share them read-only.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name shown by the presentation layer.
    name: String,
    /// The mark this player places on the board.
    mark: Mark,
}

impl Player {
    /// Creates an immutable player record.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
