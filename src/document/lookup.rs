//! Single-key lookup on document values.
//!
//! Key resolution follows property access in dynamically typed hosts: index
//! keys against a mapping look up the decimal text of the index, and label
//! keys against a sequence address an element when the label is a canonical
//! decimal index (`"0"`, `"12"`, never `"01"`).

use crate::path::tokenizer::parse_index;
use crate::path::Key;

/// A value that can be indexed by a [`Key`].
pub trait Lookup {
    /// Returns the child at `key`, or `None` when there is none or the value
    /// is not indexable.
    fn lookup(&self, key: &Key) -> Option<&Self>;

    /// Returns true for the null-equivalent value, which cannot be a root.
    fn is_null(&self) -> bool;
}

/// Parses a label that names a sequence position.
fn canonical_index(label: &str) -> Option<usize> {
    if label.len() > 1 && label.starts_with('0') {
        return None;
    }
    parse_index(label)
}

impl Lookup for serde_json::Value {
    fn lookup(&self, key: &Key) -> Option<&Self> {
        use serde_json::Value;

        match (self, key) {
            (Value::Object(fields), Key::Label(label)) => fields.get(label),
            (Value::Object(fields), Key::Index(index)) => fields.get(&index.to_string()),
            (Value::Array(items), Key::Index(index)) => items.get(*index),
            (Value::Array(items), Key::Label(label)) => {
                canonical_index(label).and_then(|index| items.get(index))
            }
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        self.is_null()
    }
}

impl Lookup for serde_yaml::Value {
    fn lookup(&self, key: &Key) -> Option<&Self> {
        use serde_yaml::{Number, Value};

        // YAML keys may be integers as well as strings.
        let integer_key = |index: usize| Value::Number(Number::from(index as u64));

        match (self, key) {
            (Value::Tagged(tagged), _) => tagged.value.lookup(key),
            (Value::Mapping(fields), Key::Label(label)) => fields.get(label.as_str()).or_else(|| {
                canonical_index(label).and_then(|index| fields.get(&integer_key(index)))
            }),
            (Value::Mapping(fields), Key::Index(index)) => fields
                .get(index.to_string().as_str())
                .or_else(|| fields.get(&integer_key(*index))),
            (Value::Sequence(items), Key::Index(index)) => items.get(*index),
            (Value::Sequence(items), Key::Label(label)) => {
                canonical_index(label).and_then(|index| items.get(index))
            }
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label(s: &str) -> Key {
        Key::Label(s.to_string())
    }

    #[test]
    fn test_canonical_index() {
        assert_eq!(canonical_index("0"), Some(0));
        assert_eq!(canonical_index("12"), Some(12));
        assert_eq!(canonical_index("01"), None);
        assert_eq!(canonical_index("x"), None);
        assert_eq!(canonical_index(""), None);
    }

    #[test]
    fn test_json_object_lookup() {
        let value = json!({"a": 1, "2": "two"});
        assert_eq!(value.lookup(&label("a")), Some(&json!(1)));
        assert_eq!(value.lookup(&Key::Index(2)), Some(&json!("two")));
        assert_eq!(value.lookup(&label("b")), None);
    }

    #[test]
    fn test_json_array_lookup() {
        let value = json!([10, 20]);
        assert_eq!(value.lookup(&Key::Index(1)), Some(&json!(20)));
        assert_eq!(value.lookup(&label("1")), Some(&json!(20)));
        assert_eq!(value.lookup(&label("01")), None);
        assert_eq!(value.lookup(&label("length")), None);
        assert_eq!(value.lookup(&Key::Index(2)), None);
    }

    #[test]
    fn test_json_scalars_are_not_indexable() {
        assert_eq!(json!("abc").lookup(&Key::Index(0)), None);
        assert_eq!(json!(5).lookup(&label("a")), None);
        assert_eq!(json!(null).lookup(&label("a")), None);
    }

    #[test]
    fn test_json_is_null() {
        assert!(Lookup::is_null(&json!(null)));
        assert!(!Lookup::is_null(&json!(false)));
    }

    #[test]
    fn test_yaml_string_and_integer_keys() {
        let value: serde_yaml::Value = serde_yaml::from_str("name: x\n1: one\n'2': two\n").unwrap();
        assert_eq!(value.lookup(&label("name")), Some(&serde_yaml::Value::from("x")));
        assert_eq!(value.lookup(&Key::Index(1)), Some(&serde_yaml::Value::from("one")));
        assert_eq!(value.lookup(&label("1")), Some(&serde_yaml::Value::from("one")));
        assert_eq!(value.lookup(&Key::Index(2)), Some(&serde_yaml::Value::from("two")));
    }

    #[test]
    fn test_yaml_sequence_lookup() {
        let value: serde_yaml::Value = serde_yaml::from_str("[a, b, c]").unwrap();
        assert_eq!(value.lookup(&Key::Index(2)), Some(&serde_yaml::Value::from("c")));
        assert_eq!(value.lookup(&label("0")), Some(&serde_yaml::Value::from("a")));
        assert_eq!(value.lookup(&Key::Index(3)), None);
    }

    #[test]
    fn test_yaml_tagged_values_are_transparent() {
        let value: serde_yaml::Value = serde_yaml::from_str("!point {x: 1, y: 2}").unwrap();
        assert!(matches!(value, serde_yaml::Value::Tagged(_)));
        assert_eq!(value.lookup(&label("y")).and_then(|y| y.as_i64()), Some(2));
    }
}
