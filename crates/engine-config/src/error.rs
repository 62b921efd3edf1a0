use thiserror::Error;

/// Errors raised when validating transform settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A zero-length delimiter makes field boundaries undefined.
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}
