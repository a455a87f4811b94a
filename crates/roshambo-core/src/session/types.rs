//! Session types.

use crate::game::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique session identifier, used for log correlation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the player is shown after a resolved round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The player's move name
    pub player_move: String,
    /// The computer's move name
    pub computer_move: String,
    /// Result from the player's perspective
    pub outcome: Outcome,
    /// Hex-encoded commitment key, disclosed so the startup digest can be
    /// recomputed independently
    pub revealed_key: String,
}

/// Reaction of the session to one input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Exit sentinel: the caller terminates the session
    Quit,
    /// Help sentinel: the rendered outcome table, one row per move
    Table(Vec<String>),
    /// Unrecognized input; `max` names the valid 1..=max range
    Invalid { max: usize },
    /// A resolved round
    Round(RoundOutcome),
}
