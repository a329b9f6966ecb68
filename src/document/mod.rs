//! Document value models that can be plucked.
//!
//! Values are borrowed, never modified. Any model implementing [`Lookup`]
//! works with [`pluck`](crate::path::pluck); implementations are provided for
//! `serde_json::Value` and `serde_yaml::Value`.

pub mod lookup;

pub use lookup::Lookup;
