//! Shape of the trees built by individual sections.

use crate::common::{nodes, service_with_throwing_function, struct_with_message};
use thriftdoc_babel::markdown::{HeadingLevel, MdNode};
use thriftdoc_babel::sections::{transform_services, transform_structs};
use thriftdoc_babel::TransformOptions;

#[test]
fn test_struct_section_has_heading_and_one_group() {
    let doc = struct_with_message();
    let tree = transform_structs(&doc, &TransformOptions::default());

    assert_eq!(tree.len(), 2);

    let tables: Vec<_> = nodes(&tree)
        .into_iter()
        .filter_map(|node| match node {
            MdNode::Table(table) => Some(table),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(
        tables[0].rows[0],
        vec!["1", "message", "string", "", "required", ""]
    );
}

#[test]
fn test_service_section_has_one_service_and_one_function() {
    let doc = service_with_throwing_function();
    let tree = transform_services(&doc);

    assert_eq!(tree.len(), 2);

    let levels: Vec<HeadingLevel> = nodes(&tree)
        .into_iter()
        .filter_map(|node| match node {
            MdNode::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect();
    assert_eq!(
        levels,
        vec![HeadingLevel::H2, HeadingLevel::H3, HeadingLevel::H4]
    );
}

#[test]
fn test_service_signature_is_quoted() {
    let doc = service_with_throwing_function();
    let markdown = thriftdoc_babel::assemble(&transform_services(&doc));

    assert!(markdown.contains("#### Function: echo\n\n"));
    assert!(markdown.contains(
        "> [Metadata](#Metadata) echo() throws [MetaException](#MetaException) ex\n\n"
    ));
}
