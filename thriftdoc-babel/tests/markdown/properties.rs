//! Property tests for the per-node rendering contract.

use proptest::prelude::*;
use thriftdoc_babel::markdown::{render, HeadingLevel, ListKind, MdNode};

fn heading_level() -> impl Strategy<Value = HeadingLevel> {
    (0usize..6).prop_map(|index| HeadingLevel::ALL[index])
}

proptest! {
    #[test]
    fn heading_is_hashes_space_text_blank_line(level in heading_level(), text in "[A-Za-z0-9 ]{0,24}") {
        let expected = format!("{} {}\n\n", "#".repeat(level.depth()), text);
        prop_assert_eq!(render(&MdNode::heading(level, text.as_str())), expected);
    }

    #[test]
    fn quote_renders_every_line_as_its_own_block(lines in prop::collection::vec("[a-z ]{0,16}", 0..6)) {
        let expected: String = lines.iter().map(|line| format!("> {line}\n\n")).collect();
        prop_assert_eq!(render(&MdNode::block_quote(lines.clone())), expected);
    }

    #[test]
    fn single_quote_matches_one_line_sequence(text in "[a-z ]{0,16}") {
        prop_assert_eq!(
            render(&MdNode::block_quote(text.as_str())),
            render(&MdNode::block_quote(vec![text.clone()]))
        );
    }

    #[test]
    fn list_items_split_on_blank_lines(
        items in prop::collection::vec("[a-z]{1,10}", 1..8),
        ordered in any::<bool>(),
    ) {
        let (kind, marker) = if ordered {
            (ListKind::Ordered, "1. ")
        } else {
            (ListKind::Unordered, "* ")
        };
        let markdown = render(&MdNode::list(kind, items.clone()));
        let segments: Vec<&str> = markdown.split("\n\n").collect();

        prop_assert_eq!(segments.len(), items.len() + 1);
        for (segment, item) in segments.iter().zip(&items) {
            prop_assert_eq!(*segment, format!("{marker}{item}"));
        }
        prop_assert_eq!(*segments.last().unwrap(), "");
    }

    #[test]
    fn code_block_has_k_plus_three_segments(
        language in "[a-z]{0,10}",
        lines in prop::collection::vec("[a-z ]{0,16}", 0..8),
    ) {
        let markdown = render(&MdNode::code_block(language.as_str(), lines.clone()));

        let opening = format!("```{language}\n");
        prop_assert!(markdown.starts_with(&opening));
        prop_assert!(markdown.ends_with("```\n"));
        prop_assert_eq!(markdown.split('\n').count(), lines.len() + 3);
    }

    #[test]
    fn table_has_header_separator_and_rows(
        headers in prop::collection::vec("[a-z]{1,8}", 1..6),
        rows in prop::collection::vec(prop::collection::vec("[a-z]{0,8}", 1..6), 0..6),
    ) {
        let markdown = render(&MdNode::table(headers.clone(), rows.clone()));
        let lines: Vec<&str> = markdown.lines().collect();

        prop_assert_eq!(lines.len(), rows.len() + 3);
        let header_line = headers.iter().map(|h| format!(" {h} |")).collect::<String>();
        prop_assert_eq!(lines[0], header_line.as_str());
        prop_assert_eq!(lines[1].matches("---").count(), headers.len());
        prop_assert!(markdown.ends_with("|\n\n"));
    }

    #[test]
    fn rendering_is_idempotent(text in "[a-z ]{0,16}", level in heading_level()) {
        let node = MdNode::heading(level, text.as_str());
        prop_assert_eq!(render(&node), render(&node));
    }
}

#[test]
fn table_contains_header_and_row_text() {
    let content = "Hello world";
    let markdown = render(&MdNode::table(
        vec!["col 1".to_string(), "col 2".to_string(), "col 3".to_string()],
        vec![
            vec![content.to_string(), content.to_string()],
            vec![content.to_string(), content.to_string()],
        ],
    ));

    assert!(markdown.contains("col 1 | col 2 | col 3"));
    assert!(markdown.contains("Hello world | Hello world |"));
    assert_eq!(markdown.split('\n').count(), 6);
}
