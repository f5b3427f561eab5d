//! Configuration types for the join pipeline.
//!
//! This module defines [`JoinConfig`], which controls how two text values
//! are composed and what happens to whitespace at the output boundary.
//!
//! # Versioning
//!
//! The `version` field exists to keep outputs reproducible. Any change to
//! join behavior (including the whitespace policy default) must be
//! accompanied by a version bump, so that:
//!
//! - Old joins remain stable and reproducible
//! - Hashes from different policy versions are distinct
//!
//! # Examples
//!
//! ```rust
//! use joiner::JoinConfig;
//!
//! let config = JoinConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.trim_trailing);
//!
//! // Plain concatenation, trailing whitespace kept as-is
//! let plain = JoinConfig {
//!     trim_trailing: false,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the join pipeline.
///
/// `JoinConfig` is cheap to clone and serializable for configuration
/// management. For a given `version`, behavior is stable across machines,
/// operating systems, and locales.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "trim_trailing": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinConfig {
    /// Semantic version of the join configuration.
    ///
    /// Must be >= 1; version 0 is reserved and rejected with
    /// [`JoinError::InvalidConfig`](crate::JoinError::InvalidConfig).
    /// The version is mixed into the identity hash
    /// (`SHA-256(version.to_be_bytes() || 0x00 || text_bytes)`), so the
    /// same text joined under different versions hashes differently.
    pub version: u32,

    /// If true, strip trailing whitespace from the joined output.
    ///
    /// Stripping applies once, at the final output boundary. Leading and
    /// internal whitespace in either input is always preserved verbatim.
    ///
    /// ```text
    /// trim_trailing: true   "Hello" + " World "  →  "Hello World"
    /// trim_trailing: false  "Hello" + " World "  →  "Hello World "
    /// ```
    ///
    /// # Default
    ///
    /// `true` (trailing whitespace is stripped)
    pub trim_trailing: bool,
}

impl Default for JoinConfig {
    /// Creates the default `JoinConfig`.
    ///
    /// # Defaults
    ///
    /// - `version`: 1
    /// - `trim_trailing`: true
    ///
    /// # Example
    ///
    /// ```rust
    /// use joiner::JoinConfig;
    ///
    /// let config = JoinConfig::default();
    /// assert_eq!(config.version, 1);
    /// assert!(config.trim_trailing);
    /// ```
    fn default() -> Self {
        Self {
            version: 1,
            trim_trailing: true,
        }
    }
}
