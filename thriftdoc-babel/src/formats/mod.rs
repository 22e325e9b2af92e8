//! Format implementations
//!
//! This module contains the output formats a parsed Thrift document can be rendered to.

pub mod json;
pub mod markdown;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
