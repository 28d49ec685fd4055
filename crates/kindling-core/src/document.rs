//! Classified document model
//!
//! A [`Jf2Document`] is the canonical flat representation of a fetched,
//! classified resource: an ordered JSON object carrying a string `type` field
//! alongside its properties (`name`, `url`, `summary`, …). The mf2 wire shape
//! is handled separately by the codec in `kindling-mf2`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};

/// Type of a full first-class item.
pub const TYPE_ENTRY: &str = "entry";

/// Type of cited material embedded as a reference target.
pub const TYPE_CITE: &str = "cite";

/// Type of a person or organization profile.
pub const TYPE_CARD: &str = "card";

/// Flat classified representation of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jf2Document(Map<String, Value>);

impl Jf2Document {
    /// Create a document of the given type with no properties.
    pub fn of_type(doc_type: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(doc_type.into()));
        Self(map)
    }

    /// Build a document from a decoded JSON value, which must be an object.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ModelError::NotAnObject(ModelError::shape_of(&other))),
        }
    }

    /// The document's classification, if it has one.
    pub fn doc_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Rewrite the document's type.
    pub fn set_type(&mut self, doc_type: impl Into<String>) {
        self.0
            .insert("type".to_string(), Value::String(doc_type.into()));
    }

    /// The document's `url` property, when it is a plain string.
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }

    /// The document's `name` property, when it is a plain string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Look up an arbitrary property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a property value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Iterate fields in insertion order, `type` included.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consume the document, returning the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Jf2Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
