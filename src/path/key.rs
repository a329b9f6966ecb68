//! Key types produced by the path tokenizer.

use std::fmt;
use std::str::FromStr;

use super::tokenizer::Tokenizer;

/// A single step in a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Named property (`.name`, `[name]`, `["name"]`)
    Label(String),
    /// Position in a sequence (`[0]`)
    Index(usize),
}

impl Key {
    /// Returns the label text, if this is a label key.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Key::Label(label) => Some(label),
            Key::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Label(_) => None,
            Key::Index(index) => Some(*index),
        }
    }

    /// Returns true if this is an index key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Label(label) => write!(f, "{}", label),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(label: &str) -> Self {
        Key::Label(label.to_string())
    }
}

impl From<String> for Key {
    fn from(label: String) -> Self {
        Key::Label(label)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// An ordered sequence of keys.
///
/// `Display` writes the canonical form: labels joined with `.`, indices as
/// `[N]`, and labels containing `.` or `[` quoted inside brackets. Parsing the
/// canonical form yields the same keys again, for every path the tokenizer can
/// produce. Two labels built by hand have no exact form: a label holding both
/// quote characters, and the empty label, which displays as `[""]` and parses
/// back to no key at all.
///
/// # Example
///
/// ```
/// use objpluck::path::{Key, KeyPath};
///
/// let path = KeyPath::parse("users[0]['first.name']");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.keys()[1], Key::Index(0));
/// assert_eq!(path.to_string(), r#"users[0]["first.name"]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    keys: Vec<Key>,
}

impl KeyPath {
    /// Creates a path from the given keys.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Tokenizes a path string. Never fails; malformed input degrades to a
    /// best-effort key sequence.
    pub fn parse(path: &str) -> Self {
        Tokenizer::tokenize(path)
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.keys.iter().enumerate() {
            match key {
                Key::Index(index) => write!(f, "[{}]", index)?,
                Key::Label(label) if needs_quoting(label) => {
                    // A label holding both quote characters has no exact form.
                    let quote = if label.contains('"') { '\'' } else { '"' };
                    write!(f, "[{}{}{}]", quote, label, quote)?;
                }
                Key::Label(label) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(label)?;
                }
            }
        }
        Ok(())
    }
}

/// Labels that would be split or bracketed if written bare.
fn needs_quoting(label: &str) -> bool {
    label.is_empty() || label.contains(['.', '['])
}

impl FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::parse(s))
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self::new(keys)
    }
}

impl IntoIterator for KeyPath {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
