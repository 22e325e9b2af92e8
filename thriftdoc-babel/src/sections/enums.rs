//! Enumeration section.

use crate::common::extract_comments;
use crate::markdown::{DocTree, HeadingLevel, MdNode};
use crate::schema::{EnumDefinition, EnumMember, ThriftDocument};
use crate::transforms::TransformOptions;
use tracing::debug;

pub const ENUM_HEADERS: [&str; 2] = ["Named Constant", "Description"];

fn member_row(member: &EnumMember, options: &TransformOptions) -> Vec<String> {
    vec![
        member.name.clone(),
        extract_comments(&member.comments, Some(options.line_break_marker.as_str())),
    ]
}

fn enum_block(def: &EnumDefinition, options: &TransformOptions) -> DocTree {
    DocTree::from(vec![
        MdNode::heading(HeadingLevel::H3, def.name.as_str()),
        MdNode::code_block(
            options.comment_language.as_str(),
            extract_comments(&def.comments, None),
        ),
        MdNode::table(
            ENUM_HEADERS.map(String::from).to_vec(),
            def.members
                .iter()
                .map(|member| member_row(member, options))
                .collect(),
        ),
    ])
}

/// "Enumerations" heading, then per enum its name, doc comment and member table.
pub fn transform_enums(doc: &ThriftDocument, options: &TransformOptions) -> DocTree {
    let enums: Vec<DocTree> = doc.enums().map(|def| enum_block(def, options)).collect();
    debug!(enums = enums.len(), "enum section");

    DocTree::seq(vec![
        MdNode::heading(HeadingLevel::H2, "Enumerations").into(),
        DocTree::seq(enums),
    ])
}
