//! Markdown documentation for Thrift IDL schemas
//!
//!     This crate turns a parsed Thrift document into Markdown. It never parses Thrift source
//!     itself: the parse tree is produced upstream and handed over either as Rust values or as the
//!     parser's JSON dump (see ./schema/mod.rs).
//!
//!     This is a pure lib, that is, it powers thriftdoc-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std print, env vars or file access.
//!
//! Architecture
//!
//!     There are two halves, joined by the document tree:
//!
//!     - The markdown model (./markdown): a closed set of block nodes, a renderer that maps each
//!       node to its exact text form, and the document tree that nests nodes into sections.
//!     - The transforms (./sections and ./transforms.rs): one section builder per declaration
//!       kind, assembled in a fixed order into a single document tree.
//!
//!     Shared mapping code (type signatures, literal values, comments) lives in ./common so the
//!     section builders stay focused on layout.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # Rendered markdown output
//!     │   └── json                # Document tree as JSON, for inspection
//!     ├── lib.rs
//!     ├── markdown                # Node model, renderer, document tree
//!     ├── schema                  # Parse tree input contract
//!     ├── common                  # Type, literal and comment formatting
//!     ├── sections                # One builder per declaration kind
//!     └── transforms.rs           # Section ordering and entry points
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # Schema fixtures
//!     ├── markdown                # Rendering contract and properties
//!     └── transforms              # Section shapes and whole documents
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod markdown;
pub mod registry;
pub mod schema;
pub mod sections;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use markdown::{assemble, render, DocTree, MdNode};
pub use registry::FormatRegistry;
pub use schema::ThriftDocument;
pub use transforms::{render_markdown, transform_document, TransformOptions};
