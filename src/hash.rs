//! Hashing utilities for the join pipeline.
//!
//! Version-aware identity hashes let callers tell which join policy
//! produced a given output. The recipe:
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || text_bytes)
//! ```
//!
//! Including the configuration version means a policy change under a bumped
//! version yields a different hash for identical inputs, which prevents
//! silent identity collisions when upgrading join behavior.

use sha2::{Digest, Sha256};

/// Compute the version-aware identity hash for joined text.
///
/// # Algorithm
///
/// ```text
/// SHA-256(version.to_be_bytes() || 0x00 || joined_bytes)
/// ```
///
/// - `version.to_be_bytes()`: 4-byte big-endian version number
/// - `0x00`: discriminator byte
/// - `joined_bytes`: UTF-8 bytes of the joined text
///
/// # Examples
///
/// ```rust
/// use joiner::hash_joined_bytes;
///
/// let hash_v1 = hash_joined_bytes(1, b"hello world");
/// let hash_v2 = hash_joined_bytes(2, b"hello world");
///
/// // Same text, different versions = different hashes
/// assert_ne!(hash_v1, hash_v2);
///
/// // Deterministic
/// assert_eq!(hash_v1, hash_joined_bytes(1, b"hello world"));
/// ```
pub fn hash_joined_bytes(join_version: u32, joined_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(join_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(joined_bytes);
    hex::encode(hasher.finalize())
}

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// General-purpose and version-agnostic; suitable for diagnostics and quick
/// content checks. For join identity hashes, use [`hash_joined_bytes`],
/// which mixes in the configuration version.
///
/// # Examples
///
/// ```rust
/// use joiner::hash_text;
///
/// let hash = hash_text("hello world");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash_text("hello world"));
/// ```
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
