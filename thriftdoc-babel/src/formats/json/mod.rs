//! JSON dump of the document tree
//!
//! Shows the tree exactly as the section builders produced it, before rendering. Sequences
//! become arrays, nodes become objects tagged with `"type"`, raw text stays a string.

use crate::error::FormatError;
use crate::format::Format;
use crate::markdown::DocTree;
use crate::schema::ThriftDocument;
use crate::transforms::{transform_document, TransformOptions};

/// Pretty-printed JSON for a document tree.
pub fn tree_to_json(tree: &DocTree) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tree)
        .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}

/// Format implementation for the JSON tree dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON, before rendering"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(
        &self,
        file_name: &str,
        doc: &ThriftDocument,
        options: &TransformOptions,
    ) -> Result<String, FormatError> {
        tree_to_json(&transform_document(file_name, doc, options))
    }
}
