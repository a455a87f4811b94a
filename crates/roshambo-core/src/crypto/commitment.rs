//! HMAC key and keyed digest for the commit-reveal scheme.

use crate::game::MoveSet;
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Secret 256-bit key for the keyed digest
#[derive(Clone, Serialize, Deserialize)]
pub struct HmacKey([u8; 32]);

impl HmacKey {
    /// Create a new random key
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Keyed digest over the move list: HMAC-SHA256(key, concat(names))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDigest([u8; 32]);

impl MoveDigest {
    fn compute(key: &HmacKey, moves: &MoveSet) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
        mac.update(&moves.concat_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Session commitment: a secret key and the digest it produced over the
/// move list.
///
/// The digest is shown to the player before the first round; the key is
/// disclosed after every round so the player can recompute the digest and
/// check that the move list was fixed in advance.
#[derive(Clone, Debug)]
pub struct MoveCommitment {
    key: HmacKey,
    digest: MoveDigest,
}

impl MoveCommitment {
    /// Commit to a move list with a fresh random key.
    pub fn commit(moves: &MoveSet) -> Self {
        Self::with_key(HmacKey::random(), moves)
    }

    /// Commit with a caller-supplied key, e.g. when re-deriving the digest
    /// of a past session for verification.
    pub fn with_key(key: HmacKey, moves: &MoveSet) -> Self {
        let digest = MoveDigest::compute(&key, moves);
        Self { key, digest }
    }

    /// The digest. Safe to disclose before play starts.
    pub fn digest(&self) -> &MoveDigest {
        &self.digest
    }

    /// Disclose the key. Idempotent; the key is never rotated.
    pub fn reveal(&self) -> &HmacKey {
        &self.key
    }

    /// Recompute the digest for a (key, move list) pair and compare.
    ///
    /// Matches `commit` bit-for-bit, so a player holding the revealed key
    /// can validate the digest shown at startup.
    pub fn verify(key: &HmacKey, moves: &MoveSet, digest: &MoveDigest) -> bool {
        MoveDigest::compute(key, moves) == *digest
    }
}
