//! Content addressing for thought text.
//!
//! Every thought is keyed by the SHA-256 digest of its exact bytes, so the
//! same text always maps to the same identifier and distinct texts collide
//! with negligible probability. Nothing here depends on engine state.

use sha2::{Digest, Sha256};

/// Identifier for a thought node (lowercase hex SHA-256 digest).
pub type ThoughtId = String;

/// Hash thought text into its identifier.
///
/// Pure function of the input bytes; the empty string is valid input and
/// yields a valid identifier like any other text.
pub fn thought_hash(text: &str) -> ThoughtId {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
