//! Tagged manifest value tree
//!
//! Both manifest formats are parsed into this tree before extraction, so
//! the normalization code has a single, explicitly typed shape to walk.
//! Object entries keep declaration order; dependency order determines
//! compiler search precedence downstream.

use crate::{Error, Result};

/// A node in a parsed manifest tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Array(Vec<Value>),
    /// Ordered key/value entries. Keys are not required to be unique;
    /// lookups return the first match.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Human-readable name of this node's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Look up a key in an object node. Returns `None` for missing keys
    /// and for non-object nodes.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The string content of this node, or a shape error naming `context`.
    pub fn expect_str(&self, context: &str) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(Error::shape("string", other.kind(), context)),
        }
    }

    /// The elements of this array node, or a shape error naming `context`.
    pub fn expect_array(&self, context: &str) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::shape("array", other.kind(), context)),
        }
    }

    /// The entries of this object node, or a shape error naming `context`.
    pub fn expect_object(&self, context: &str) -> Result<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(Error::shape("object", other.kind(), context)),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    /// Convert a JSON tree into a manifest value tree.
    ///
    /// Numbers and booleans are carried as their string rendition; manifest
    /// extraction only ever reads strings, so this keeps manifests with
    /// numeric metadata fields parseable. `null` has no meaningful mapping
    /// and is rejected.
    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::String(s) => Ok(Value::Str(s)),
            serde_json::Value::Number(n) => Ok(Value::Str(n.to_string())),
            serde_json::Value::Bool(b) => Ok(Value::Str(b.to_string())),
            serde_json::Value::Array(items) => Ok(Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_>>()?,
            )),
            serde_json::Value::Object(map) => Ok(Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_>>()?,
            )),
            serde_json::Value::Null => Err(Error::shape("string, array or object", "null", "JSON manifest")),
        }
    }
}
