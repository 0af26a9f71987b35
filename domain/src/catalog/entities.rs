//! Catalog domain entities
//!
//! [`Catalog`] wraps the whole seed document. The `tools` array is held
//! as typed [`ToolRecord`]s; every other top-level field stays in the
//! document map untouched and is re-serialized in its original position,
//! so a load/save cycle changes nothing the merge didn't change.

use crate::core::error::{CatalogError, json_type};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// One entry in the catalog's `tools` collection.
///
/// A record is an ordered field map. The `slug` field, when present and
/// a string, identifies the record for patching; records without one are
/// never matched. Overwriting a field keeps its position in the map,
/// new fields are appended, the same semantics the seed data was
/// originally maintained under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolRecord {
    fields: Map<String, Value>,
}

impl ToolRecord {
    /// Build a record from a raw field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The record's slug, if it has a string `slug` field.
    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").and_then(Value::as_str)
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, overwriting any existing value in place.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Iterate over all fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// The seed document.
///
/// Holds the parsed `tools` records plus the rest of the document. The
/// document map keeps a placeholder under the `tools` key so the array
/// serializes back into its original slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    doc: Map<String, Value>,
    records: Vec<ToolRecord>,
}

impl Catalog {
    /// Read a catalog out of a parsed JSON value.
    ///
    /// The value must be an object with a `tools` array whose elements
    /// are all objects. Anything else is a [`CatalogError`]: the
    /// document is rejected before any merge semantics apply.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let mut doc = match value {
            Value::Object(map) => map,
            other => {
                return Err(CatalogError::NotAnObject {
                    found: json_type(&other),
                });
            }
        };

        let tools = doc.get_mut("tools").ok_or(CatalogError::MissingTools)?;
        let entries = match tools.take() {
            Value::Array(entries) => entries,
            other => {
                return Err(CatalogError::ToolsNotArray {
                    found: json_type(&other),
                });
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Value::Object(fields) => records.push(ToolRecord::from_fields(fields)),
                other => {
                    return Err(CatalogError::RecordNotObject {
                        index,
                        found: json_type(&other),
                    });
                }
            }
        }

        Ok(Self { doc, records })
    }

    /// Turn the catalog back into a plain JSON value.
    pub fn into_value(mut self) -> Value {
        let tools: Vec<Value> = self.records.into_iter().map(ToolRecord::into_value).collect();
        // Reinsert over the placeholder: the key already exists, so its
        // position in the document is preserved.
        self.doc.insert("tools".to_string(), Value::Array(tools));
        Value::Object(self.doc)
    }

    /// Number of records in the `tools` collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in document order.
    pub fn records(&self) -> impl Iterator<Item = &ToolRecord> {
        self.records.iter()
    }

    /// Iterate mutably over records in document order.
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut ToolRecord> {
        self.records.iter_mut()
    }

    /// Look up a top-level document field other than the records themselves.
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == "tools" {
            return None;
        }
        self.doc.get(key)
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.doc.len()))?;
        for (key, value) in &self.doc {
            if key == "tools" {
                map.serialize_entry(key, &self.records)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
