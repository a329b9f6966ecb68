//! Path string tokenizer.
//!
//! A single left-to-right pass over the input driven by a three-state machine.
//! Malformed input (unterminated brackets or quotes, backslash escapes) never
//! fails; whatever has been collected is flushed as a trailing label.

use super::key::{Key, KeyPath};

/// Scanner position relative to brackets and quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    InBracket,
    InQuote(char),
}

/// Tokenizer for path strings such as `a.b[0]["c.d"]`.
pub struct Tokenizer {
    state: State,
    buffer: String,
    keys: Vec<Key>,
}

impl Tokenizer {
    /// Creates a tokenizer in its initial state.
    pub fn new() -> Self {
        Self {
            state: State::Plain,
            buffer: String::new(),
            keys: Vec::new(),
        }
    }

    /// Tokenizes `path` into a `KeyPath`.
    pub fn tokenize(path: &str) -> KeyPath {
        let mut tokenizer = Tokenizer::new();
        for ch in path.chars() {
            tokenizer.feed(ch);
        }
        tokenizer.finish()
    }

    /// Advances the state machine by one character.
    fn feed(&mut self, ch: char) {
        match self.state {
            State::Plain => match ch {
                '.' => self.flush_label(),
                '[' => {
                    self.flush_label();
                    self.state = State::InBracket;
                }
                _ => self.buffer.push(ch),
            },
            State::InBracket => match ch {
                '"' | '\'' => self.state = State::InQuote(ch),
                ']' => {
                    self.flush_bracket();
                    self.state = State::Plain;
                }
                _ => self.buffer.push(ch),
            },
            State::InQuote(quote) if ch == quote => self.state = State::InBracket,
            State::InQuote(_) => self.buffer.push(ch),
        }
    }

    /// Flushes any pending text and returns the collected keys.
    fn finish(mut self) -> KeyPath {
        self.flush_label();
        KeyPath::new(self.keys)
    }

    fn flush_label(&mut self) {
        if !self.buffer.is_empty() {
            let label = std::mem::take(&mut self.buffer);
            self.keys.push(Key::Label(label));
        }
    }

    /// Closes a bracket segment; all-digit content becomes an index.
    fn flush_bracket(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.buffer);
        let key = match parse_index(&content) {
            Some(index) => Key::Index(index),
            None => Key::Label(content),
        };
        self.keys.push(key);
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one or more ASCII digits as a base-10 index.
///
/// Digit runs too large for `usize` are not indices.
pub(crate) fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Converts a path string into its ordered keys.
///
/// # Example
///
/// ```
/// use objpluck::path::{tokenize, Key};
///
/// assert_eq!(
///     tokenize("a[0].b"),
///     vec![Key::Label("a".into()), Key::Index(0), Key::Label("b".into())]
/// );
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(path: &str) -> Vec<Key> {
    Tokenizer::tokenize(path).into_keys()
}
