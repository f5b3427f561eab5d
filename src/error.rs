use thiserror::Error;

/// Errors that can occur while joining text.
///
/// Both join inputs are `&str`, so a non-text argument cannot reach this
/// crate at all; the remaining error surface is configuration validation.
/// Variants are cloneable and comparable so tests can match them exactly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
