//! Cryptographic primitives for the fairness commitment.
//!
//! This module provides:
//! - HmacKey: the session's secret 256-bit key
//! - MoveDigest and MoveCommitment for the commit-reveal scheme

mod commitment;

pub use commitment::{HmacKey, MoveCommitment, MoveDigest};
