//! Error types for format operations

use thiserror::Error;

/// Errors that can occur at the edges of the pipeline
///
/// Transforming and rendering a document cannot fail; only loading a parse tree,
/// looking up a format and serializing the output can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The schema parse tree could not be read
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
