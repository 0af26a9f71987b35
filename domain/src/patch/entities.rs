//! Patch set entities

use crate::core::error::{PatchError, json_type};
use serde_json::{Map, Value};

/// A bounded table of field overrides keyed by slug.
///
/// Each entry is a partial record: the fields it names are written onto
/// every matching catalog record in full (a list value replaces the old
/// list wholesale, nothing is deep-merged); fields it does not name are
/// left alone. Entries keep the order they were written in, which fixes
/// the order missing slugs are reported in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSet {
    entries: Map<String, Value>,
}

impl PatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a patch set out of a parsed JSON value.
    ///
    /// The value must be an object whose values are all objects.
    pub fn from_value(value: Value) -> Result<Self, PatchError> {
        let entries = match value {
            Value::Object(map) => map,
            other => {
                return Err(PatchError::NotAnObject {
                    found: json_type(&other),
                });
            }
        };

        for (slug, fields) in &entries {
            if !fields.is_object() {
                return Err(PatchError::EntryNotObject {
                    slug: slug.clone(),
                    found: json_type(fields),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Add or replace the entry for a slug.
    pub fn insert(&mut self, slug: impl Into<String>, fields: Map<String, Value>) {
        self.entries.insert(slug.into(), Value::Object(fields));
    }

    /// The field overrides for a slug, if the table has an entry for it.
    pub fn get(&self, slug: &str) -> Option<&Map<String, Value>> {
        self.entries.get(slug).and_then(Value::as_object)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Iterate over patched slugs in entry order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_slug_keyed_objects() {
        let patches = PatchSet::from_value(json!({
            "langchain": {"description": "new", "monthly_price": 39},
            "flowise": {"tags": ["노코드", "RAG"]}
        }))
        .unwrap();

        assert_eq!(patches.len(), 2);
        assert!(patches.contains("langchain"));
        assert_eq!(
            patches.get("langchain").unwrap().get("monthly_price"),
            Some(&json!(39))
        );
        assert_eq!(patches.slugs().collect::<Vec<_>>(), vec!["langchain", "flowise"]);
    }

    #[test]
    fn test_from_value_rejects_non_object_root() {
        let err = PatchSet::from_value(json!(["a"])).unwrap_err();
        assert!(matches!(err, PatchError::NotAnObject { found: "an array" }));
    }

    #[test]
    fn test_from_value_rejects_non_object_entry() {
        let err = PatchSet::from_value(json!({"ghost": "new description"})).unwrap_err();
        match err {
            PatchError::EntryNotObject { slug, found } => {
                assert_eq!(slug, "ghost");
                assert_eq!(found, "a string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut patches = PatchSet::new();
        let mut fields = Map::new();
        fields.insert("description".to_string(), json!("first"));
        patches.insert("alpha", fields);

        let mut fields = Map::new();
        fields.insert("description".to_string(), json!("second"));
        patches.insert("alpha", fields);

        assert_eq!(patches.len(), 1);
        assert_eq!(
            patches.get("alpha").unwrap().get("description"),
            Some(&json!("second"))
        );
    }
}
