//! Typedef section.

use crate::common::format_type;
use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::{ThriftDocument, TypedefDefinition};
use tracing::debug;

fn typedef_block(def: &TypedefDefinition) -> DocTree {
    DocTree::from(vec![
        MdNode::heading(HeadingLevel::H3, def.name.as_str()),
        MdNode::block_quote(format!("{} {}", format_type(&def.definition_type), def.name)),
    ])
}

/// "Types" heading, then per typedef its name and `<aliased type> <name>`.
pub fn transform_typedefs(doc: &ThriftDocument) -> DocTree {
    let typedefs: Vec<DocTree> = doc.typedefs().map(typedef_block).collect();
    debug!(typedefs = typedefs.len(), "typedef section");

    DocTree::seq(vec![
        MdNode::heading(HeadingLevel::H2, "Types").into(),
        DocTree::seq(typedefs),
    ])
}
