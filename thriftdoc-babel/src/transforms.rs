//! Document transform: the sections in their fixed order.
//!
//! This is the functional entry point of the crate. Both steps are pure: the same parse tree
//! and options always produce the same tree and the same text.
//!
//! # Example
//!
//! ```
//! use thriftdoc_babel::schema::ThriftDocument;
//! use thriftdoc_babel::transforms::{render_markdown, TransformOptions};
//!
//! let doc = ThriftDocument::default();
//! let markdown = render_markdown("meta.thrift", &doc, &TransformOptions::default());
//! assert!(markdown.starts_with("# meta\n\n"));
//! ```

use crate::common::LINE_BREAK_MARKER;
use crate::markdown::{assemble, DocTree};
use crate::schema::ThriftDocument;
use crate::sections::{
    transform_constants, transform_enums, transform_module, transform_services,
    transform_structs, transform_typedefs,
};
use tracing::debug;

/// GitLab-style table-of-contents placeholder.
pub const DEFAULT_TOC_MARKER: &str = "[[_TOC_]]";

/// Knobs for the section builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Emit the table-of-contents marker after the module header
    pub table_of_contents: bool,

    /// Text of the table-of-contents marker
    pub toc_marker: String,

    /// Replacement for line breaks in comments shown inside table cells
    pub line_break_marker: String,

    /// Language token on the fenced blocks holding enum and struct comments
    pub comment_language: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            table_of_contents: true,
            toc_marker: DEFAULT_TOC_MARKER.to_string(),
            line_break_marker: LINE_BREAK_MARKER.to_string(),
            comment_language: String::new(),
        }
    }
}

/// Build the document tree for a parsed file.
///
/// Order: module header, typedefs, constants, enumerations, structures, services.
pub fn transform_document(
    file_name: &str,
    doc: &ThriftDocument,
    options: &TransformOptions,
) -> DocTree {
    debug!(file_name, statements = doc.body.len(), "transforming document");
    DocTree::seq(vec![
        transform_module(file_name, doc, options),
        transform_typedefs(doc),
        transform_constants(doc, options),
        transform_enums(doc, options),
        transform_structs(doc, options),
        transform_services(doc),
    ])
}

/// Transform and render in one go.
pub fn render_markdown(file_name: &str, doc: &ThriftDocument, options: &TransformOptions) -> String {
    assemble(&transform_document(file_name, doc, options))
}
