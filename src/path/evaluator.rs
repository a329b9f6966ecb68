//! Traversal of nested values by key path.

use tracing::{debug, trace};

use super::error::PluckError;
use super::key::{Key, KeyPath};
use crate::document::Lookup;

/// The path argument accepted by [`pluck`].
///
/// Built from `&str`, `&String`, `usize`, or an `Option` of any of those,
/// where `None` stands for an absent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathArg<'a> {
    /// A path string to tokenize.
    Text(&'a str),
    /// A single index applied directly to the root.
    Index(usize),
    /// No path at all.
    Absent,
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(path: &'a str) -> Self {
        PathArg::Text(path)
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(path: &'a String) -> Self {
        PathArg::Text(path.as_str())
    }
}

impl From<usize> for PathArg<'_> {
    fn from(index: usize) -> Self {
        PathArg::Index(index)
    }
}

impl<'a, T: Into<PathArg<'a>>> From<Option<T>> for PathArg<'a> {
    fn from(path: Option<T>) -> Self {
        path.map_or(PathArg::Absent, Into::into)
    }
}

/// Walks a value one key at a time.
pub struct Evaluator<'v, V: Lookup> {
    root: &'v V,
}

impl<'v, V: Lookup> Evaluator<'v, V> {
    pub fn new(root: &'v V) -> Self {
        Evaluator { root }
    }

    /// Resolves `keys` against the root.
    ///
    /// Every key is applied even after a miss, so a path whose early segment
    /// is missing resolves to `None` rather than failing. An empty key
    /// sequence resolves to the root itself.
    pub fn evaluate(&self, keys: &KeyPath) -> Option<&'v V> {
        let mut cursor = Some(self.root);
        for (depth, key) in keys.iter().enumerate() {
            cursor = step(cursor, key);
            trace!(depth, key = %key, found = cursor.is_some(), "pluck step");
        }
        cursor
    }
}

/// Looks `key` up in `cursor`; looking anything up in an absent cursor is
/// absent.
pub fn step<'v, V: Lookup>(cursor: Option<&'v V>, key: &Key) -> Option<&'v V> {
    cursor.and_then(|value| value.lookup(key))
}

/// Gets the value at `path` inside `root`.
///
/// Returns `Ok(None)` when the path does not resolve and `Ok(Some(null))`
/// when an explicit null is stored there.
///
/// # Errors
///
/// - [`PluckError::InvalidRoot`] if `root` is null.
/// - [`PluckError::InvalidPath`] if `path` is absent or the empty string.
///
/// # Example
///
/// ```
/// use objpluck::pluck;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20, 30]}});
/// assert_eq!(pluck(&doc, "a.b[1]").unwrap(), Some(&json!(20)));
/// assert_eq!(pluck(&doc, "a.c.d").unwrap(), None);
/// assert!(pluck(&doc, "").is_err());
/// ```
pub fn pluck<'v, 'p, V, P>(root: &'v V, path: P) -> Result<Option<&'v V>, PluckError>
where
    V: Lookup,
    P: Into<PathArg<'p>>,
{
    if root.is_null() {
        return Err(PluckError::InvalidRoot);
    }

    match path.into() {
        PathArg::Absent | PathArg::Text("") => Err(PluckError::InvalidPath),
        PathArg::Index(index) => {
            debug!(index, "plucking direct index");
            Ok(root.lookup(&Key::Index(index)))
        }
        PathArg::Text(text) => {
            let keys = KeyPath::parse(text);
            debug!(path = text, keys = keys.len(), "plucking path");
            Ok(Evaluator::new(root).evaluate(&keys))
        }
    }
}

/// Like [`pluck`], with a root that may be absent.
pub fn pluck_from<'v, 'p, V, P>(root: Option<&'v V>, path: P) -> Result<Option<&'v V>, PluckError>
where
    V: Lookup,
    P: Into<PathArg<'p>>,
{
    match root {
        Some(root) => pluck(root, path),
        None => Err(PluckError::InvalidRoot),
    }
}
