//! File I/O for plucked documents.
//!
//! This module loads JSON, JSONL and YAML documents from disk or stdin, and
//! renders plucked values back to text.

pub mod loader;
pub mod writer;
