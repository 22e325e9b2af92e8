//! Constants section: a single table for every `const` in the file.

use crate::common::{extract_comments, format_const, format_literal, format_type};
use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::{ConstDefinition, ConstValue, ThriftDocument};
use crate::transforms::TransformOptions;
use tracing::debug;

pub const CONSTANT_HEADERS: [&str; 4] = ["Constant", "Type", "Description", "Value"];

fn constant_value(def: &ConstDefinition) -> String {
    match &def.initializer {
        value @ (ConstValue::ConstList { .. } | ConstValue::ConstMap { .. }) => {
            format_const(value, Some(&def.field_type))
        }
        value => format_literal(value),
    }
}

fn constant_row(def: &ConstDefinition, options: &TransformOptions) -> Vec<String> {
    vec![
        def.name.clone(),
        format_type(&def.field_type),
        extract_comments(&def.comments, Some(options.line_break_marker.as_str())),
        constant_value(def),
    ]
}

/// "Constants" heading and one table with a row per constant.
pub fn transform_constants(doc: &ThriftDocument, options: &TransformOptions) -> DocTree {
    let rows: Vec<Vec<String>> = doc
        .constants()
        .map(|def| constant_row(def, options))
        .collect();
    debug!(constants = rows.len(), "constants section");

    DocTree::from(vec![
        MdNode::heading(HeadingLevel::H2, "Constants"),
        MdNode::table(CONSTANT_HEADERS.map(String::from).to_vec(), rows),
    ])
}
