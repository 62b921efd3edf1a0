use crate::error::FieldExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateParseError {
    /// The extracted value does not conform to the configured pattern.
    #[error("Value `{value}` does not match date format `{format}`: {source}")]
    FormatMismatch {
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The configured pattern itself is malformed. Detected lazily, on the
    /// first parse attempt.
    #[error("Invalid date format `{format}`: {source}")]
    InvalidPattern {
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Everything that can go wrong while deriving a timestamp from a record
/// body. Never escapes the transform: each variant degrades to the
/// wall-clock fallback and a logged warning.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Extract(#[from] FieldExtractError),

    #[error("Field is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Parse(#[from] DateParseError),
}
