//! Core data structures for the markdown document model.
//!
//! Every block the renderer knows about is one [`MdNode`] variant. The set is closed: adding a
//! variant means extending [`crate::markdown::render`], and the compiler enforces it.

use serde::Serialize;

/// A single block of markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MdNode {
    Heading(Heading),
    Paragraph(Paragraph),
    BlockQuote(BlockQuote),
    Image(Image),
    List(List),
    CodeBlock(CodeBlock),
    Table(Table),
}

/// Heading depth, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Number of `#` characters for this level.
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Level for a depth in `1..=6`, `None` otherwise.
    pub fn from_depth(depth: usize) -> Option<Self> {
        depth
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// Text payload that is either one block or several independent ones.
///
/// Each line of a [`TextBlock::Lines`] payload renders as its own block; they are never joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextBlock {
    Single(String),
    Lines(Vec<String>),
}

impl TextBlock {
    /// The payload as a slice of lines, a single string being one line.
    pub fn lines(&self) -> &[String] {
        match self {
            TextBlock::Single(text) => std::slice::from_ref(text),
            TextBlock::Lines(lines) => lines,
        }
    }
}

impl From<String> for TextBlock {
    fn from(text: String) -> Self {
        TextBlock::Single(text)
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        TextBlock::Single(text.to_string())
    }
}

impl From<Vec<String>> for TextBlock {
    fn from(lines: Vec<String>) -> Self {
        TextBlock::Lines(lines)
    }
}

impl From<Vec<&str>> for TextBlock {
    fn from(lines: Vec<&str>) -> Self {
        TextBlock::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

/// Represents a heading with a specific level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

/// Represents one or more paragraphs of prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: TextBlock,
}

/// Represents quoted text, one quote block per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockQuote {
    pub text: TextBlock,
}

/// Represents an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub source: String,
    pub title: Option<String>,
    pub alt_text: Option<String>,
}

/// Whether list items are numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// Represents a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// Represents a fenced block of verbatim text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: String,
    pub lines: TextBlock,
}

/// Represents a table.
///
/// Row lengths are independent of the header count; nothing pads or truncates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MdNode {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        MdNode::Heading(Heading {
            level,
            text: text.into(),
        })
    }

    pub fn paragraph(text: impl Into<TextBlock>) -> Self {
        MdNode::Paragraph(Paragraph { text: text.into() })
    }

    pub fn block_quote(text: impl Into<TextBlock>) -> Self {
        MdNode::BlockQuote(BlockQuote { text: text.into() })
    }

    pub fn image(source: impl Into<String>, title: Option<String>, alt_text: Option<String>) -> Self {
        MdNode::Image(Image {
            source: source.into(),
            title,
            alt_text,
        })
    }

    pub fn list(kind: ListKind, items: Vec<String>) -> Self {
        MdNode::List(List { kind, items })
    }

    pub fn code_block(language: impl Into<String>, lines: impl Into<TextBlock>) -> Self {
        MdNode::CodeBlock(CodeBlock {
            language: language.into(),
            lines: lines.into(),
        })
    }

    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        MdNode::Table(Table { headers, rows })
    }

    /// Short lowercase name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MdNode::Heading(_) => "heading",
            MdNode::Paragraph(_) => "paragraph",
            MdNode::BlockQuote(_) => "block_quote",
            MdNode::Image(_) => "image",
            MdNode::List(_) => "list",
            MdNode::CodeBlock(_) => "code_block",
            MdNode::Table(_) => "table",
        }
    }
}
