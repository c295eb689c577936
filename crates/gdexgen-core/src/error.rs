//! Error types for header generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for header generation
///
/// Generation either fully succeeds or fails with one of these; there is
/// no partial-output recovery and no per-entry skip (the one exception is
/// the deliberate unknown-type-tag skip, which is not an error).
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The output destination cannot be opened for writing
    #[error("cannot open '{path}' for writing: {reason}")]
    SinkUnavailable { path: String, reason: String },

    /// The input bytes are not valid UTF-8 or not well-formed JSON
    #[error("schema parse failure: {0}")]
    SchemaParse(String),

    /// The parsed tree does not match the schema shape the emitters assume
    #[error("schema shape violation: {0}")]
    SchemaShape(String),

    /// The parsed document has no entries at all
    #[error("schema document is empty")]
    SchemaEmpty,
}

impl From<std::str::Utf8Error> for GeneratorError {
    fn from(err: std::str::Utf8Error) -> Self {
        GeneratorError::SchemaParse(err.to_string())
    }
}
