//! Input contract: the parsed Thrift document.
//!
//! Parsing Thrift source is not done here. Callers either build a [`ThriftDocument`] in code or
//! load the parser's JSON dump with [`from_json`].

pub mod ast;

pub use ast::*;

use crate::error::FormatError;
use tracing::debug;

/// Load a parse tree from its JSON form.
pub fn from_json(source: &str) -> Result<ThriftDocument, FormatError> {
    let doc: ThriftDocument =
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
    debug!(statements = doc.body.len(), "loaded thrift parse tree");
    Ok(doc)
}
