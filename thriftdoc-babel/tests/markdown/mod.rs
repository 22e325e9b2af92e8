//! Markdown model tests
//!
//! Rendering contract properties and tree flattening.

mod flatten;
mod properties;
