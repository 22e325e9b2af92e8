//! Document header: title, namespaces and the table-of-contents marker.
//!
//! The marker is a raw leaf holding exactly the configured text. A second raw leaf after it
//! supplies the blank line, so the next section heading starts its own block.

use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::ThriftDocument;
use crate::transforms::TransformOptions;
use std::path::Path;
use tracing::debug;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Title for a document read from `file_name`: its base name up to the first `.`.
///
/// `api/shared.thrift.json` gives `shared`.
pub fn document_title(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.split('.').next().unwrap_or_default().to_string()
}

/// H1 title, one quote per namespace target, then the table-of-contents marker.
pub fn transform_module(
    file_name: &str,
    doc: &ThriftDocument,
    options: &TransformOptions,
) -> DocTree {
    let namespaces: Vec<MdNode> = doc
        .namespaces()
        .map(|namespace| MdNode::block_quote(namespace.name.as_str()))
        .collect();
    debug!(namespaces = namespaces.len(), "module section");

    let mut section = vec![
        MdNode::heading(HeadingLevel::H1, document_title(file_name)).into(),
        DocTree::from(namespaces),
    ];
    if options.table_of_contents {
        section.push(DocTree::seq(vec![
            DocTree::raw(options.toc_marker.as_str()),
            DocTree::raw(BLOCK_SEPARATOR),
        ]));
    }
    DocTree::seq(section)
}
