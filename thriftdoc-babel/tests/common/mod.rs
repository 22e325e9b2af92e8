//! Shared fixtures for the integration tests.

use std::path::PathBuf;
use thriftdoc_babel::markdown::{Block, DocTree, MdNode};
use thriftdoc_babel::schema::{
    FieldDefinition, FieldType, FunctionDefinition, Requiredness, ServiceDefinition,
    StructDefinition, ThriftDocument, ThriftStatement,
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture file should exist")
}

fn field(id: i64, name: &str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition {
        field_id: Some(id),
        name: name.to_string(),
        field_type,
        requiredness: None,
        default_value: None,
        comments: vec![],
    }
}

/// `struct MetaException { 1: required string message }`
pub fn struct_with_message() -> ThriftDocument {
    let mut message = field(1, "message", FieldType::StringKeyword);
    message.requiredness = Some(Requiredness::Required);

    ThriftDocument::new(vec![ThriftStatement::StructDefinition(StructDefinition {
        name: "MetaException".to_string(),
        fields: vec![message],
        comments: vec![],
    })])
}

/// `service MetaService { Metadata echo() throws (1: MetaException ex) }`
pub fn service_with_throwing_function() -> ThriftDocument {
    ThriftDocument::new(vec![ThriftStatement::ServiceDefinition(ServiceDefinition {
        name: "MetaService".to_string(),
        extends: None,
        functions: vec![FunctionDefinition {
            name: "echo".to_string(),
            return_type: FieldType::identifier("Metadata"),
            fields: vec![],
            throws: vec![field(1, "ex", FieldType::identifier("MetaException"))],
            oneway: false,
            comments: vec![],
        }],
        comments: vec![],
    })])
}

/// Every node in the tree, in document order.
pub fn nodes(tree: &DocTree) -> Vec<&MdNode> {
    thriftdoc_babel::markdown::tree_to_blocks(tree)
        .into_iter()
        .filter_map(|block| match block {
            Block::Node(node) => Some(node),
            Block::Raw(_) => None,
        })
        .collect()
}
