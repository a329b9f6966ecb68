//! objpluck - safe path-based access into nested values.
//!
//! A path such as `a.b[0]["c.d"]` is tokenized into [`Key`]s and walked
//! against a document. Paths that do not resolve yield `None`; only
//! malformed calls (null root, empty path) are errors.
//!
//! ```
//! use objpluck::{pluck, tokenize, Key};
//! use serde_json::json;
//!
//! let doc = json!([{"x": 1}, {"x": 2}]);
//! assert_eq!(pluck(&doc, "1.x").unwrap(), Some(&json!(2)));
//! assert_eq!(pluck(&doc, 0usize).unwrap(), Some(&json!({"x": 1})));
//! assert_eq!(tokenize("[0]"), vec![Key::Index(0)]);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod path;

pub use document::Lookup;
pub use path::{pluck, pluck_from, tokenize, Key, KeyPath, PathArg, PluckError};
