//! Output formats by name
//!
//! The CLI picks a format with `--to`, by output file extension, or from configuration; all
//! three resolve through this registry.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{JsonFormat, MarkdownFormat};
use crate::schema::ThriftDocument;
use crate::transforms::TransformOptions;
use std::collections::HashMap;
use tracing::debug;

/// Name-keyed set of output formats.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let markdown = registry.serialize("meta.thrift", &doc, "markdown", &options)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Add `format` under its own name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Format whose extensions include the extension of `filename`.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Render `doc` (read from `file_name`) with the format called `format`.
    pub fn serialize(
        &self,
        file_name: &str,
        doc: &ThriftDocument,
        format: &str,
        options: &TransformOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        debug!(format, file_name, "serializing document");
        fmt.serialize(file_name, doc, options)
    }

    /// Markdown and JSON.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MarkdownFormat);
        registry.register(JsonFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
