//! Converts a nested document tree into a flat block stream, then into text.
//!
//! # The High-Level Concept
//!
//! Sections are built as nested sequences (a section holds per-declaration groups, which hold
//! nodes), but markdown itself is flat. Walking the tree in pre-order yields the blocks in
//! document order; rendering each block and concatenating gives the final text.
//!
//! # The Algorithm
//!
//! 1. **Initialization:**
//!    - Create an empty block vector
//!    - Begin walking from the root `DocTree`
//!
//! 2. **Sequences:**
//!    - Recurse into each child, left to right
//!
//! 3. **Leaves:**
//!    - A node becomes a `Block::Node` in place
//!    - Raw text (such as a table-of-contents marker) becomes a `Block::Raw` in place
//!
//! 4. **Rendering:**
//!    - Nodes go through [`render`]; raw text is appended verbatim, without a blank line

use super::nodes::MdNode;
use super::render::render;
use serde::Serialize;
use tracing::trace;

/// A nested, ordered tree of markdown nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocTree {
    Node(MdNode),
    /// Opaque text appended to the output as is.
    Raw(String),
    Seq(Vec<DocTree>),
}

impl DocTree {
    pub fn seq(children: Vec<DocTree>) -> Self {
        DocTree::Seq(children)
    }

    pub fn raw(text: impl Into<String>) -> Self {
        DocTree::Raw(text.into())
    }

    /// Number of direct children; leaves count as one.
    pub fn len(&self) -> usize {
        match self {
            DocTree::Seq(children) => children.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DocTree::Seq(children) if children.is_empty())
    }
}

impl From<MdNode> for DocTree {
    fn from(node: MdNode) -> Self {
        DocTree::Node(node)
    }
}

impl From<Vec<MdNode>> for DocTree {
    fn from(nodes: Vec<MdNode>) -> Self {
        DocTree::Seq(nodes.into_iter().map(DocTree::Node).collect())
    }
}

impl From<Vec<DocTree>> for DocTree {
    fn from(children: Vec<DocTree>) -> Self {
        DocTree::Seq(children)
    }
}

/// One entry of the flattened stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Node(&'a MdNode),
    Raw(&'a str),
}

/// Converts a `DocTree` to a flat vector of `Block`s in document order.
pub fn tree_to_blocks(root: &DocTree) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    walk_tree(root, &mut blocks);
    blocks
}

fn walk_tree<'a>(tree: &'a DocTree, blocks: &mut Vec<Block<'a>>) {
    match tree {
        DocTree::Node(node) => blocks.push(Block::Node(node)),
        DocTree::Raw(text) => blocks.push(Block::Raw(text)),
        DocTree::Seq(children) => {
            for child in children {
                walk_tree(child, blocks);
            }
        }
    }
}

/// Flatten the tree and concatenate the rendered blocks.
pub fn assemble(root: &DocTree) -> String {
    let mut output = String::new();
    for block in tree_to_blocks(root) {
        match block {
            Block::Node(node) => {
                trace!(kind = node.kind(), "rendering block");
                output.push_str(&render(node));
            }
            Block::Raw(text) => output.push_str(text),
        }
    }
    output
}
