//! Property bag model
//!
//! A [`PropertyBag`] is the decoded `properties` map of an incoming content
//! item: property name to scalar, ordered sequence, or nested structured
//! document (an embedded citation). Insertion order is preserved so that an
//! untouched bag re-serializes byte-identically.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};

/// Key that marks a bag as a micropub query (read request, never resolved)
pub const QUERY_KEY: &str = "q";

/// The closed set of reference-bearing properties.
///
/// Only these properties point at an external resource eligible for
/// resolution; everything else passes through the pipeline untouched.
pub const REFERENCE_PROPERTIES: [&str; 7] = [
    "bookmark-of",
    "like-of",
    "favorite-of",
    "in-reply-to",
    "read-of",
    "listen-of",
    "watch-of",
];

/// Returns true if `name` is one of the reference-bearing properties.
pub fn is_reference_property(name: &str) -> bool {
    REFERENCE_PROPERTIES.contains(&name)
}

/// Decoded property map of a content item.
///
/// Newtype over an ordered JSON object. The bag is exclusively owned by one
/// pipeline run at a time; the orchestrator takes it by value and hands it
/// back when done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a bag from a decoded JSON value.
    ///
    /// This is the structural precondition boundary: anything that is not a
    /// JSON object is rejected here, and nothing downstream has to recover
    /// from malformed input shape.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ModelError::NotAnObject(ModelError::shape_of(&other))),
        }
    }

    /// True if the bag carries the query-indicator key and therefore
    /// represents a read request rather than a content submission.
    pub fn is_query(&self) -> bool {
        self.0.contains_key(QUERY_KEY)
    }

    /// Look up a property value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Mutable access to a property value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    /// Set a property value, replacing any existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of properties in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the bag holds no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the bag, returning the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for PropertyBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
