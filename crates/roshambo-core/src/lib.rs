//! Roshambo Core Library
//!
//! This crate provides the cyclic outcome-table algorithm, the commit-reveal
//! fairness scheme, and the round-resolution session logic for an n-way
//! generalization of rock-paper-scissors played against the computer.

pub mod crypto;
pub mod game;
pub mod session;

pub use crypto::{HmacKey, MoveCommitment, MoveDigest};
pub use game::{ConfigError, MoveSet, Outcome, OutcomeTable};
pub use session::{GameSession, RoundOutcome, SessionId, Turn};
