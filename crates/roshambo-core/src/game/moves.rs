//! Move set validation.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors from session configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected at least 3 moves, got {0}")]
    TooFewMoves(usize),

    #[error("expected an odd number of moves, got {0}")]
    EvenMoveCount(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

/// Ordered, duplicate-free list of move names. Fixed for the session lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate raw tokens into a move set.
    ///
    /// The count must be odd and at least 3 (a single move only draws
    /// against itself), and no name may repeat.
    pub fn new(names: Vec<String>) -> Result<Self, ConfigError> {
        if names.len() < 3 {
            return Err(ConfigError::TooFewMoves(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount(names.len()));
        }

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(names))
    }

    /// Number of moves. Always odd and at least 3.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move name at `index`.
    pub fn name(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// Iterate names in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The exact bytes the commitment digests: all names concatenated in
    /// order, with no separator.
    pub fn concat_bytes(&self) -> Vec<u8> {
        self.0.concat().into_bytes()
    }
}
