//! Session lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle of a session: `Waiting -> Active -> Ended`, never backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Roster is being assembled.
    #[default]
    Waiting,
    /// Turns are being played.
    Active,
    /// A player met the win condition.
    Ended,
}

impl GameStatus {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Active => "active",
            GameStatus::Ended => "ended",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
