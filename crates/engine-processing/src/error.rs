use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldExtractError {
    /// The buffer holds fewer fields than the requested index.
    #[error("Field index {index} out of range: buffer contains {fields} field(s)")]
    OutOfRange { index: usize, fields: usize },
}
