use std::time::Instant;

use tracing::{info, warn, Level};

use crate::config::JoinConfig;
use crate::error::JoinError;
use crate::hash::hash_joined_bytes;
use crate::joined::JoinedText;
use crate::whitespace::trim_trailing;

/// Main entry point. Joins two text values under the given config and
/// returns the joined output with its identity hash.
pub fn join(first: &str, second: &str, cfg: &JoinConfig) -> Result<JoinedText, JoinError> {
    let start = Instant::now();

    let span = tracing::span!(
        Level::INFO,
        "joiner.join",
        first_len = first.len(),
        second_len = second.len()
    );
    let _guard = span.enter();

    // Config validation: version 0 is reserved and invalid.
    if cfg.version == 0 {
        let err = JoinError::InvalidConfig("config version must be >= 1".into());
        let elapsed_micros = start.elapsed().as_micros();
        warn!(error = %err, elapsed_micros, "join_failure");
        return Err(err);
    }

    let text = compose(first, second, cfg);
    let sha256_hex = hash_joined_bytes(cfg.version, text.as_bytes());

    let elapsed_micros = start.elapsed().as_micros();
    info!(joined_len = text.len(), elapsed_micros, "join_success");

    Ok(JoinedText {
        text,
        sha256_hex,
        join_version: cfg.version,
        config: cfg.clone(),
    })
}

/// Joins two text values under the default policy.
///
/// Appends `second` directly after `first` with no separator, then strips
/// trailing whitespace from the end of the result. Leading and internal
/// whitespace in either input is preserved verbatim. Pure and infallible;
/// both parameters are `&str`, so non-text arguments cannot occur.
///
/// # Examples
///
/// ```rust
/// use joiner::concatenate;
///
/// assert_eq!(concatenate("Hello", " World"), "Hello World");
/// assert_eq!(concatenate("Hello", " there"), "Hello there");
///
/// // Trailing whitespace is stripped from the output
/// assert_eq!(concatenate("Hello", " World "), "Hello World");
///
/// // Empty inputs are fine
/// assert_eq!(concatenate("", ""), "");
/// assert_eq!(concatenate("x", ""), "x");
/// assert_eq!(concatenate("", "y"), "y");
/// ```
///
/// # See Also
///
/// - [`join()`](crate::join) for the configurable pipeline with identity
///   hashing and a config snapshot in the output
pub fn concatenate(first: &str, second: &str) -> String {
    compose(first, second, &JoinConfig::default())
}

/// Core composition: sequential append, then the whitespace policy.
fn compose(first: &str, second: &str, cfg: &JoinConfig) -> String {
    let mut joined = String::with_capacity(first.len() + second.len());
    joined.push_str(first);
    joined.push_str(second);

    // The policy applies once, at the final output boundary. Whitespace at
    // the end of `first` becomes internal after the append and is kept.
    if cfg.trim_trailing {
        let trimmed_len = trim_trailing(&joined).len();
        joined.truncate(trimmed_len);
    }

    joined
}
