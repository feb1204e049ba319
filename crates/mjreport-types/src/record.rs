//! Response records as produced by the upstream generation API client.
//!
//! A [`Record`] is read-only and schema-loose: every accessor takes a key and
//! falls back to a literal default when the key is missing, `null`, or of an
//! unexpected shape. Nothing here can fail once a record exists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value::{is_truthy_value, render_value, type_name};
use crate::{Error, Result};

/// Placeholder written for any scalar field the record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a record from JSON text. The top-level value must be an object.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::try_from(value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Key presence, regardless of the stored value (including `null`).
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Scalar field rendered for display, `"N/A"` when absent.
    pub fn text(&self, key: &str) -> String {
        self.text_or(key, NOT_AVAILABLE)
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map(render_value)
            .unwrap_or_else(|| default.to_string())
    }

    /// Sequence field with each item rendered as text.
    ///
    /// Missing keys and non-array values both yield an empty list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(render_value).collect(),
            _ => Vec::new(),
        }
    }

    /// Nested mapping, or an empty record when absent or not an object.
    pub fn section(&self, key: &str) -> Record {
        match self.get(key) {
            Some(Value::Object(map)) => Record::new(map.clone()),
            _ => Record::empty(),
        }
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy_value)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(Error::NotAnObject(type_name(&other))),
        }
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

/// Compact JSON of the whole mapping, keys in sorted order.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
