//! Markdown format implementation
//!
//! The output is plain text assembled block by block (see crate::markdown::render), with no
//! markdown library in between: the exact text of every block is part of the contract.
//!
//! # Element Mapping Table
//!
//! | Thrift Element | Markdown                                                   |
//! |----------------|------------------------------------------------------------|
//! | File           | `# <base name>` + namespace quotes + TOC marker            |
//! | typedef        | `### Name` + `> <type> Name`                               |
//! | const          | Row in the Constants table                                 |
//! | enum           | `### Name` + comment code block + member table             |
//! | struct         | `### Name` + comment code block + field table              |
//! | service        | `### Name` + `#### Function: f` + `> signature` per function |
//! | Named type     | `[Name](#Name)` link                                       |
//!
//! # Lossy Conversions
//!
//! - Map key types are not shown (`map<K,V>` renders `map<V>`)
//! - Line comments are dropped; only block comments are documentation
//! - Unions, exceptions and includes are not listed
//! - Enum member values and service inheritance are not shown

use crate::error::FormatError;
use crate::format::Format;
use crate::schema::ThriftDocument;
use crate::transforms::{render_markdown, TransformOptions};

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown reference documentation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(
        &self,
        file_name: &str,
        doc: &ThriftDocument,
        options: &TransformOptions,
    ) -> Result<String, FormatError> {
        Ok(render_markdown(file_name, doc, options))
    }
}
