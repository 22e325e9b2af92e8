//! Markdown document model.
//!
//! A closed set of block nodes ([`nodes`]), the text form of each node ([`render`]) and the
//! nested document tree that sections are built from ([`tree`]).

pub mod nodes;
pub mod render;
pub mod tree;

pub use nodes::{HeadingLevel, ListKind, MdNode, TextBlock};
pub use render::render;
pub use tree::{assemble, tree_to_blocks, Block, DocTree};
