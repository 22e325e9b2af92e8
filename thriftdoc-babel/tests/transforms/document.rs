//! End-to-end rendering of the fixture document.

use crate::common::{fixture_path, read_fixture};
use thriftdoc_babel::schema::{from_json, StatementKind};
use thriftdoc_babel::{render_markdown, FormatRegistry, TransformOptions};

const FILE_NAME: &str = "meta.thrift.json";

fn load_meta() -> thriftdoc_babel::ThriftDocument {
    from_json(&read_fixture(FILE_NAME)).expect("fixture should parse")
}

#[test]
fn test_fixture_renders_expected_markdown() {
    let doc = load_meta();
    let markdown = render_markdown(FILE_NAME, &doc, &TransformOptions::default());

    assert_eq!(markdown, read_fixture("meta.md"));
}

#[test]
fn test_rendering_is_stable() {
    let doc = load_meta();
    let options = TransformOptions::default();

    assert_eq!(
        render_markdown(FILE_NAME, &doc, &options),
        render_markdown(FILE_NAME, &doc, &options)
    );
}

#[test]
fn test_fixture_statements_are_all_parsed() {
    let doc = load_meta();

    assert!(fixture_path(FILE_NAME).exists());
    assert_eq!(doc.body.len(), 10);
    assert_eq!(doc.count(StatementKind::Struct), 1);
    assert_eq!(doc.count(StatementKind::Exception), 1);
}

#[test]
fn test_numeric_constants_render_their_literal() {
    let markdown = render_markdown(FILE_NAME, &load_meta(), &TransformOptions::default());

    assert!(markdown.contains(" MAX_RETRIES | i32 | Retry budget | 3 |\n"));
    assert!(markdown.contains(" SAMPLE_RATE | double | Share of calls traced | 0.25 |\n"));
    assert!(markdown.contains(" 4 | attempts | i32 |  |  | 1 |\n"));
}

#[test]
fn test_exceptions_are_not_listed_as_structures() {
    let markdown = render_markdown(FILE_NAME, &load_meta(), &TransformOptions::default());

    assert!(!markdown.contains("### MetaException"));
    assert!(markdown.contains("[MetaException](#MetaException)"));
}

#[test]
fn test_disabling_toc_drops_only_the_marker() {
    let doc = load_meta();
    let options = TransformOptions {
        table_of_contents: false,
        ..TransformOptions::default()
    };
    let with_toc = render_markdown(FILE_NAME, &doc, &TransformOptions::default());
    let without_toc = render_markdown(FILE_NAME, &doc, &options);

    assert!(!without_toc.contains("[[_TOC_]]"));
    assert_eq!(with_toc.replace("[[_TOC_]]\n\n", ""), without_toc);
}

#[test]
fn test_comment_language_tags_fenced_comments() {
    let options = TransformOptions {
        comment_language: "text".to_string(),
        ..TransformOptions::default()
    };
    let markdown = render_markdown(FILE_NAME, &load_meta(), &options);

    assert!(markdown.contains("```text\nOutcome of a call.\n```\n"));
    assert!(markdown.contains("```text\nMetadata attached to an entry.\n```\n"));
}

#[test]
fn test_registry_formats_agree_on_content() {
    let registry = FormatRegistry::with_defaults();
    let doc = load_meta();
    let options = TransformOptions::default();

    let markdown = registry
        .serialize(FILE_NAME, &doc, "markdown", &options)
        .unwrap();
    assert_eq!(markdown, read_fixture("meta.md"));

    let json = registry.serialize(FILE_NAME, &doc, "json", &options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let sections = value.as_array().expect("root is a sequence");
    assert_eq!(sections.len(), 6);
    assert_eq!(sections[0][0]["text"], "meta");
}
