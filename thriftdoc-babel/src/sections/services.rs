//! Service section: one heading per service, one signature per function.

use crate::common::format_type;
use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::{FieldDefinition, FunctionDefinition, ServiceDefinition, ThriftDocument};
use tracing::debug;

/// `<type> <name>` pairs joined with `, `.
pub fn comma_list(fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .map(|field| format!("{} {}", format_type(&field.field_type), field.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<return type> name(<params>) throws <exceptions>`; no throws clause when nothing is thrown.
pub fn function_signature(func: &FunctionDefinition) -> String {
    let signature = format!(
        "{} {}({})",
        format_type(&func.return_type),
        func.name,
        comma_list(&func.fields)
    );
    if func.throws.is_empty() {
        signature
    } else {
        format!("{signature} throws {}", comma_list(&func.throws))
    }
}

fn function_block(func: &FunctionDefinition) -> DocTree {
    DocTree::from(vec![
        MdNode::heading(HeadingLevel::H4, format!("Function: {}", func.name)),
        MdNode::block_quote(function_signature(func)),
    ])
}

fn service_block(def: &ServiceDefinition) -> DocTree {
    DocTree::seq(vec![
        MdNode::heading(HeadingLevel::H3, def.name.as_str()).into(),
        DocTree::seq(def.functions.iter().map(function_block).collect()),
    ])
}

/// "Services" heading, then per service its functions.
pub fn transform_services(doc: &ThriftDocument) -> DocTree {
    let services: Vec<DocTree> = doc.services().map(service_block).collect();
    debug!(services = services.len(), "service section");

    DocTree::seq(vec![
        MdNode::heading(HeadingLevel::H2, "Services").into(),
        DocTree::seq(services),
    ])
}
