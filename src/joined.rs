//! Output types for the join pipeline.
//!
//! This module defines [`JoinedText`], the output of [`join()`](crate::join).
//!
//! # Determinism
//!
//! For a fixed [`JoinConfig`](crate::JoinConfig) and input pair, every field
//! of `JoinedText` is deterministic: same `text`, same `sha256_hex`, on any
//! machine, at any time.

use serde::{Deserialize, Serialize};

use crate::config::JoinConfig;

/// The result of joining two text values.
///
/// Carries the joined text together with the identity hash and a snapshot
/// of the configuration that produced it, so a join can be reproduced or
/// audited later.
///
/// # Examples
///
/// ```rust
/// use joiner::{join, JoinConfig};
///
/// let config = JoinConfig::default();
/// let joined = join("Hello", " World ", &config).unwrap();
///
/// assert_eq!(joined.text, "Hello World");
/// assert_eq!(joined.join_version, 1);
/// assert_eq!(joined.sha256_hex.len(), 64);
/// assert_eq!(joined.config, config);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinedText {
    /// Joined text after the whitespace policy has been applied.
    pub text: String,

    /// Version-aware identity hash of `text`.
    ///
    /// Computed as `SHA-256(version.to_be_bytes() || 0x00 || text_bytes)`
    /// and hex-encoded. Same text under a different config version hashes
    /// differently.
    pub sha256_hex: String,

    /// Join configuration version used to produce this output.
    ///
    /// Copy of [`JoinConfig::version`] for convenience.
    pub join_version: u32,

    /// Snapshot of the join configuration.
    pub config: JoinConfig,
}
