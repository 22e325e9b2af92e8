//! Format trait definition
//!
//! This module defines the Format trait that all output formats implement. A format receives
//! the parsed Thrift document plus the name of the file it came from and produces text.

use crate::error::FormatError;
use crate::schema::ThriftDocument;
use crate::transforms::TransformOptions;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(
///         &self,
///         file_name: &str,
///         doc: &ThriftDocument,
///         options: &TransformOptions,
///     ) -> Result<String, FormatError> {
///         // Render the document
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a parsed document read from `file_name`
    fn serialize(
        &self,
        file_name: &str,
        doc: &ThriftDocument,
        options: &TransformOptions,
    ) -> Result<String, FormatError>;
}
