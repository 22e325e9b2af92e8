//! Data structure section.
//!
//! Only `struct` declarations are listed; unions and exceptions are skipped.

use crate::common::{extract_comments, format_const, format_type};
use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::{ConstValue, FieldDefinition, StructDefinition, ThriftDocument};
use crate::transforms::TransformOptions;
use tracing::debug;

pub const STRUCT_HEADERS: [&str; 6] = [
    "Key",
    "Field",
    "Type",
    "Description",
    "Required",
    "Default value",
];

/// String defaults are shown bare; everything else goes through the constant formatter.
fn default_value(field: &FieldDefinition) -> String {
    match &field.default_value {
        Some(ConstValue::StringLiteral { value }) => value.clone(),
        Some(value) => format_const(value, Some(&field.field_type)),
        None => String::new(),
    }
}

fn field_row(field: &FieldDefinition, options: &TransformOptions) -> Vec<String> {
    vec![
        field.field_id.map(|id| id.to_string()).unwrap_or_default(),
        field.name.clone(),
        format_type(&field.field_type),
        extract_comments(&field.comments, Some(options.line_break_marker.as_str())),
        field
            .requiredness
            .map(|requiredness| requiredness.as_str().to_string())
            .unwrap_or_default(),
        default_value(field),
    ]
}

fn struct_block(def: &StructDefinition, options: &TransformOptions) -> DocTree {
    DocTree::from(vec![
        MdNode::heading(HeadingLevel::H3, def.name.as_str()),
        MdNode::code_block(
            options.comment_language.as_str(),
            extract_comments(&def.comments, None),
        ),
        MdNode::table(
            STRUCT_HEADERS.map(String::from).to_vec(),
            def.fields
                .iter()
                .map(|field| field_row(field, options))
                .collect(),
        ),
    ])
}

/// "Data Structures" heading, then per struct its name, doc comment and field table.
pub fn transform_structs(doc: &ThriftDocument, options: &TransformOptions) -> DocTree {
    let structs: Vec<DocTree> = doc
        .structs()
        .map(|def| struct_block(def, options))
        .collect();
    debug!(structs = structs.len(), "struct section");

    DocTree::seq(vec![
        MdNode::heading(HeadingLevel::H2, "Data Structures").into(),
        DocTree::seq(structs),
    ])
}
