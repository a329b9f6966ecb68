//! Error types for plucking.

use std::fmt;

/// Errors raised for malformed `pluck` calls.
///
/// A path that simply does not resolve is not an error; it yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluckError {
    /// The root value is absent or null.
    InvalidRoot,
    /// The path is absent or the empty string.
    InvalidPath,
}

impl fmt::Display for PluckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluckError::InvalidRoot => write!(f, "Cannot pluck from a null or absent root"),
            PluckError::InvalidPath => write!(f, "Cannot pluck without a path"),
        }
    }
}

impl std::error::Error for PluckError {}
