//! Definition mappings: the label → value input of a bi-enum.

use thiserror::Error;

use crate::property_key::{PropertyKey, PropertyMap};
use crate::value::Value;

/// Errors raised while reading a definition from JSON.
///
/// Construction itself never fails; only parsing an external definition can.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("invalid definition JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a definition must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A label → value mapping, enumerated in own-property order.
///
/// ```
/// use bienum_runtime::Definition;
///
/// let direction = Definition::new().entry("Up", 1).entry("Down", 2);
/// assert_eq!(direction.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definition {
    entries: PropertyMap<Value>,
}

impl Definition {
    pub fn new() -> Self {
        Definition {
            entries: PropertyMap::new(),
        }
    }

    /// Builder form of [`Definition::insert`].
    pub fn entry(mut self, label: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.insert(label, value);
        self
    }

    /// Add an entry. A repeated label keeps its position and takes the new
    /// value.
    pub fn insert(&mut self, label: impl Into<PropertyKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(label, value.into())
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(label, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(PropertyKey::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn from_json(json: serde_json::Value) -> Result<Self, DefinitionError> {
        let found = json_kind(&json);
        let serde_json::Value::Object(map) = json else {
            return Err(DefinitionError::NotAnObject { found });
        };
        Ok(map.into_iter().collect())
    }

    pub fn from_json_str(source: &str) -> Result<Self, DefinitionError> {
        let json: serde_json::Value = serde_json::from_str(source)?;
        Self::from_json(json)
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> FromIterator<(K, V)> for Definition {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut definition = Definition::new();
        for (label, value) in iter {
            definition.insert(label, value);
        }
        definition
    }
}

#[cfg(test)]
#[path = "../tests/definition_tests.rs"]
mod tests;
