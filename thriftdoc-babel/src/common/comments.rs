//! Documentation comment extraction.
//!
//! Only block comments count as documentation. Line comments (`#`, `//`) are skipped.

use crate::schema::Comment;

/// Inline line break used inside table cells.
pub const LINE_BREAK_MARKER: &str = "<br/>";

/// Concatenate the block comments of a declaration.
///
/// Each segment has its leading whitespace trimmed. With a `line_break_marker`, every `\n` and
/// `\r` in the result is replaced by the marker (table cells cannot hold newlines); without one
/// the newlines are kept (code blocks can).
pub fn extract_comments(comments: &[Comment], line_break_marker: Option<&str>) -> String {
    let text: String = comments
        .iter()
        .filter_map(|comment| match comment {
            Comment::CommentBlock { value } => Some(value),
            Comment::CommentLine { .. } => None,
        })
        .flatten()
        .map(|segment| segment.trim_start())
        .collect();

    match line_break_marker {
        Some(marker) => text.replace(['\n', '\r'], marker),
        None => text,
    }
}
