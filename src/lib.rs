//! Text joining layer.
//!
//! This crate joins two text values into one deterministic output with a
//! versioned whitespace policy. Callers that only need the plain operation
//! use [`concatenate`]; callers that want a reproducible, auditable result
//! use [`join`], which also produces a version-aware identity hash.
//!
//! ## What we do
//!
//! - Sequential concatenation (`first` then `second`, no separator)
//! - Trailing-whitespace stripping at the output boundary (configurable,
//!   on by default; leading and internal whitespace are never touched)
//! - Versioned identity hashes so you can tell which policy was used
//! - Structured logs via tracing on the pipeline entry point
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent output, no OS/locale dependence. Give us the
//! same inputs and config, you get the same result on any machine. Both
//! operations are safe to call concurrently from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - Inputs are `&str`, so non-text arguments are unrepresentable
//! - Empty inputs are valid; `concatenate("", "") == ""`
//! - Output depends only on the two inputs + config
//! - Hash = SHA-256(version || 0x00 || joined_text)
//!
//! Bottom line: same inputs + same config = same output forever.

mod config;
mod error;
mod hash;
mod joined;
mod pipeline;
mod whitespace;

pub use crate::config::JoinConfig;
pub use crate::error::JoinError;
pub use crate::hash::{hash_joined_bytes, hash_text};
pub use crate::joined::JoinedText;
pub use crate::pipeline::{concatenate, join};
pub use crate::whitespace::trim_trailing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenate_basic() {
        assert_eq!(concatenate("Hello", " World"), "Hello World");
        assert_eq!(concatenate("Hello", " there"), "Hello there");
    }

    #[test]
    fn concatenate_is_plain_append_without_trailing_whitespace() {
        let cases = [
            ("Hello", " World"),
            ("a", "b"),
            ("", "y"),
            ("x", ""),
            ("  lead", " mid  dle"),
        ];
        for (first, second) in cases {
            assert_eq!(concatenate(first, second), format!("{first}{second}"));
        }
    }

    #[test]
    fn concatenate_strips_trailing_whitespace() {
        assert_eq!(concatenate("Hello", " World "), "Hello World");
        assert_eq!(concatenate("Hello", " World\t\n"), "Hello World");
        assert_eq!(concatenate("x", "   "), "x");
        assert_eq!(concatenate("", "   "), "");
    }

    #[test]
    fn concatenate_strips_unicode_trailing_whitespace() {
        assert_eq!(concatenate("hello", " world\u{00A0}"), "hello world");
        assert_eq!(concatenate("\u{3000}lead", "kept\u{3000}"), "\u{3000}leadkept");
    }

    #[test]
    fn concatenate_preserves_leading_and_internal_whitespace() {
        assert_eq!(concatenate("  a", " b  c"), "  a b  c");
        // Whitespace at the end of `first` becomes internal and is kept.
        assert_eq!(concatenate("a  ", "b"), "a  b");
        // Unless `second` is empty, in which case it sits at the boundary.
        assert_eq!(concatenate("a  ", ""), "a");
    }

    #[test]
    fn concatenate_empty_cases() {
        assert_eq!(concatenate("", ""), "");
        assert_eq!(concatenate("x", ""), "x");
        assert_eq!(concatenate("", "y"), "y");
    }

    #[test]
    fn concatenate_associative_without_trailing_whitespace() {
        let triples = [
            ("Hello", " big", " World"),
            ("", "a", "b"),
            ("  x", "y", "  z"),
        ];
        for (a, b, c) in triples {
            assert_eq!(
                concatenate(&concatenate(a, b), c),
                concatenate(a, &concatenate(b, c)),
            );
        }
    }

    #[test]
    fn join_basic_default() {
        let cfg = JoinConfig::default();
        let out = join("Hello", " World ", &cfg).expect("join succeeds");

        assert_eq!(out.text, "Hello World");
        assert_eq!(out.join_version, cfg.version);
        assert_eq!(out.config, cfg);

        let expected_hash = hash_joined_bytes(out.join_version, out.text.as_bytes());
        assert_eq!(out.sha256_hex, expected_hash);
    }

    #[test]
    fn join_plain_policy_keeps_trailing_whitespace() {
        let cfg = JoinConfig {
            trim_trailing: false,
            ..Default::default()
        };
        let out = join("Hello", " World ", &cfg).expect("join succeeds");
        assert_eq!(out.text, "Hello World ");
    }

    #[test]
    fn join_matches_concatenate_under_default_config() {
        let cfg = JoinConfig::default();
        for (first, second) in [("Hello", " World "), ("", ""), ("a\t", " b\n")] {
            let out = join(first, second, &cfg).expect("join succeeds");
            assert_eq!(out.text, concatenate(first, second));
        }
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = JoinConfig {
            version: 0,
            ..Default::default()
        };
        let res = join("a", "b", &cfg);
        assert!(matches!(res, Err(JoinError::InvalidConfig(_))));
    }

    #[test]
    fn join_hash_includes_version() {
        let cfg_v1 = JoinConfig::default();
        let cfg_v2 = JoinConfig {
            version: cfg_v1.version + 1,
            ..JoinConfig::default()
        };

        let out_v1 = join("Same", " text", &cfg_v1).expect("v1");
        let out_v2 = join("Same", " text", &cfg_v2).expect("v2");

        assert_eq!(out_v1.text, out_v2.text);
        assert_ne!(out_v1.sha256_hex, out_v2.sha256_hex);
    }

    #[test]
    fn hash_text_determinism() {
        let texts = ["", "hello world", "こんにちは世界", "emoji \u{1f600}"];

        for text in texts {
            assert_eq!(hash_text(text), hash_text(text));
        }
    }

    #[test]
    fn trim_trailing_cases() {
        assert_eq!(trim_trailing("hello "), "hello");
        assert_eq!(trim_trailing("hello\r\n"), "hello");
        assert_eq!(trim_trailing("  hello"), "  hello");
        assert_eq!(trim_trailing("   \t  "), "");
        assert_eq!(trim_trailing(""), "");
    }

    #[test]
    fn config_serde_round_trip() {
        let cfg = JoinConfig {
            version: 3,
            trim_trailing: false,
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back: JoinConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cfg);
    }

    #[test]
    fn joined_text_serde_round_trip() {
        let out = join("Hello", " World", &JoinConfig::default()).expect("join succeeds");
        let json = serde_json::to_string(&out).expect("serialize");
        let back: JoinedText = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, out);
    }
}
