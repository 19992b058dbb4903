//! Error types for strict label decoding.
//!
//! The lenient codec is total and never reports errors; these variants are
//! produced only by the opt-in strict decoding path, so a host can tell a
//! user *why* a label failed to decode.

use thiserror::Error;

/// Reasons a padding string is rejected by strict decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty padding string")]
    EmptyInput,

    #[error("invalid side value: {token:?}")]
    InvalidSideToken { token: String },

    #[error("expected 1 to 4 side values, found {count}")]
    InvalidValueCount { count: usize },

    #[error("malformed condition clause: {clause:?}")]
    MalformedClause { clause: String },
}
