//! Contains mapping code shared by the section builders.

pub mod comments;
pub mod types;

pub use comments::{extract_comments, LINE_BREAK_MARKER};
pub use types::{cross_reference, format_const, format_literal, format_type};
