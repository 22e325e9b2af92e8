//! Markdown text for a single node
//!
//! Every block except code blocks ends with a blank line (`\n\n`) so blocks can be concatenated
//! without further separators. Multi-line paragraph and quote payloads render one block per line.
//!
//! | Node       | Output                                   |
//! |------------|------------------------------------------|
//! | Heading n  | `#`×n, space, text, blank line           |
//! | Paragraph  | text, blank line (per line)              |
//! | BlockQuote | `> `, text, blank line (per line)        |
//! | Image      | `![alt](source "title")`, blank line      |
//! | List       | `1. item` or `* item`, blank line (each) |
//! | CodeBlock  | fence + language, lines, fence, newline  |
//! | Table      | header, `---` separator, rows, blank line |
//!
//! Ordered list items all render as `1.`; CommonMark renumbers them on display.

use super::nodes::{
    BlockQuote, CodeBlock, Heading, Image, List, ListKind, MdNode, Paragraph, Table, TextBlock,
};

const BLOCK_END: &str = "\n\n";
const FENCE: &str = "```";
const TABLE_SEPARATOR: &str = "---";

/// Render one node to its markdown text.
pub fn render(node: &MdNode) -> String {
    match node {
        MdNode::Heading(heading) => render_heading(heading),
        MdNode::Paragraph(Paragraph { text }) => render_prefixed(text, ""),
        MdNode::BlockQuote(BlockQuote { text }) => render_prefixed(text, "> "),
        MdNode::Image(image) => render_image(image),
        MdNode::List(list) => render_list(list),
        MdNode::CodeBlock(code) => render_code_block(code),
        MdNode::Table(table) => render_table(table),
    }
}

fn render_heading(heading: &Heading) -> String {
    format!(
        "{} {}{BLOCK_END}",
        "#".repeat(heading.level.depth()),
        heading.text
    )
}

fn render_prefixed(text: &TextBlock, prefix: &str) -> String {
    text.lines()
        .iter()
        .map(|line| format!("{prefix}{line}{BLOCK_END}"))
        .collect()
}

fn render_image(image: &Image) -> String {
    format!(
        "![{}]({} \"{}\"){BLOCK_END}",
        image.alt_text.as_deref().unwrap_or_default(),
        image.source,
        image.title.as_deref().unwrap_or_default()
    )
}

fn render_list(list: &List) -> String {
    let marker = match list.kind {
        ListKind::Ordered => "1.",
        ListKind::Unordered => "*",
    };
    list.items
        .iter()
        .map(|item| format!("{marker} {item}{BLOCK_END}"))
        .collect()
}

fn render_code_block(code: &CodeBlock) -> String {
    let mut output = format!("{FENCE}{}\n", code.language);
    for line in code.lines.lines() {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str(FENCE);
    output.push('\n');
    output
}

fn render_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(table_row(table.headers.as_slice()));
    lines.push(table_row(vec![TABLE_SEPARATOR; table.headers.len()].as_slice()));
    lines.extend(table.rows.iter().map(|row| table_row(row.as_slice())));
    format!("{}{BLOCK_END}", lines.join("\n"))
}

/// Every cell is preceded by a space and terminated by ` |`.
fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| format!(" {} |", cell.as_ref()))
        .collect()
}
