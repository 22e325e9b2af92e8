//! Section and whole-document transformation tests

mod document;
mod sections;
