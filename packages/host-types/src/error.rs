//! Errors for identifier validation and envelope decoding.

use thiserror::Error;

/// Errors raised while validating or parsing identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("client type is empty")]
    EmptyClientType,

    #[error("invalid character `{0}` in client type")]
    InvalidCharacter(char),

    #[error("identifier `{0}` is missing a `-{{sequence}}` suffix")]
    MissingSequence(String),

    #[error("sequence in identifier `{0}` is not an unsigned integer")]
    InvalidSequence(String),
}

/// Errors raised by the type-tagged envelope.
///
/// A tag mismatch is reported before the payload bytes are ever interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unexpected type URL, expected ({expected}) but found ({found})")]
    UnexpectedTypeUrl { expected: String, found: String },

    #[error("unable to encode `{type_url}` payload: {reason}")]
    PayloadEncode { type_url: String, reason: String },

    #[error("unable to decode `{type_url}` payload: {reason}")]
    PayloadDecode { type_url: String, reason: String },
}
