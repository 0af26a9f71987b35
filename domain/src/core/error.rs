//! Domain error types

use thiserror::Error;

/// Shape errors raised when a JSON value cannot be read as a catalog.
///
/// These cover structure only; the JSON itself already parsed. A
/// document that trips one of these is malformed input, not a merge
/// failure.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("document root is {found}, expected an object")]
    NotAnObject { found: &'static str },

    #[error("document has no `tools` field")]
    MissingTools,

    #[error("`tools` is {found}, expected an array")]
    ToolsNotArray { found: &'static str },

    #[error("tools[{index}] is {found}, expected an object")]
    RecordNotObject { index: usize, found: &'static str },
}

/// Shape errors raised when a JSON value cannot be read as a patch set.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("patch root is {found}, expected an object keyed by slug")]
    NotAnObject { found: &'static str },

    #[error("patch entry for slug '{slug}' is {found}, expected an object of field overrides")]
    EntryNotObject { slug: String, found: &'static str },
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
