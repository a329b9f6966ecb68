//! Path tokenizing and plucking for nested values.
//!
//! A path string is split into [`Key`]s by the [`tokenizer`] and walked by
//! the [`evaluator`] against any value implementing
//! [`Lookup`](crate::document::Lookup).
//!
//! # Supported Syntax
//!
//! - `name` or `.name` - Named property (leading, trailing and repeated dots are ignored)
//! - `[0]` - Index (one or more ASCII digits)
//! - `[name]` - Named property, taken literally
//! - `["a.b"]` or `['a.b']` - Quoted property, may contain `.`, `[` and `]`
//!
//! # Examples
//!
//! ```
//! // users[0].name        - first user's name
//! // config["log.level"]  - a key containing a dot
//! // 1.x                  - property `x` of the second element
//! ```

pub mod error;
pub mod evaluator;
pub mod key;
pub mod tokenizer;

pub use error::PluckError;
pub use evaluator::{pluck, pluck_from, step, Evaluator, PathArg};
pub use key::{Key, KeyPath};
pub use tokenizer::{tokenize, Tokenizer};
