//! Dual-direction instances.
//!
//! A `BiEnum` holds two kinds of data:
//!
//! - **Own entries**: the forward (`label → value`) and reverse
//!   (`String(value) → label`) entries, in one namespace. This is what `get`,
//!   iteration, `len` and serialization see.
//! - **Helper record**: a [`Prototype`] with `allLabels`, `allValues`,
//!   `isLabel` and `isValue`, reachable only through the helper accessors.
//!
//! Keeping the helper record out of the own-entry namespace means a
//! definition may use `allLabels` or `isLabel` as a label (or produce them as
//! a reverse key) without hiding the helpers.

use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::definition::Definition;
use crate::property_key::{PropertyKey, PropertyMap};
use crate::prototype::{HELPER_NAMES, Prototype};
use crate::value::Value;

static UNDEFINED: Value = Value::Undefined;

#[derive(Debug, Clone)]
pub struct BiEnum {
    entries: PropertyMap<Value>,
    prototype: Arc<Prototype>,
}

impl BiEnum {
    /// Build the instance for `definition`.
    ///
    /// For each entry in enumeration order: a classic-primitive value also
    /// gets a reverse entry `String(value) → label`, written before the
    /// forward entry `label → value`; the label and value are appended to the
    /// helper record. Later writes to the same key win. Never fails.
    pub fn new(definition: &Definition) -> Self {
        let mut entries = PropertyMap::with_capacity(definition.len() * 2);
        let mut prototype = Prototype::with_capacity(definition.len());

        for (label, value) in definition.iter() {
            match value.as_classic_primitive() {
                Some(primitive) => {
                    entries.insert(primitive.to_key_string(), Value::from(label));
                }
                None => {
                    trace!(label, kind = value.type_of(), "no reverse entry for non-primitive value");
                }
            }
            entries.insert(label, value.clone());
            prototype.push(label, value);
        }

        debug!(
            labels = prototype.len(),
            own_entries = entries.len(),
            "constructed bi-enum"
        );

        BiEnum {
            entries,
            prototype: Arc::new(prototype),
        }
    }

    /// Own entry lookup, `instance[key]`. Helpers are never returned here.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<&Value> {
        let key = key.into();
        self.entries.get(key.as_str())
    }

    pub fn contains_key(&self, key: impl Into<PropertyKey>) -> bool {
        let key = key.into();
        self.entries.contains_key(key.as_str())
    }

    /// The forward value of `label`, if `label` is a definition label.
    ///
    /// This reads the own entry, so a reverse entry that overwrote the
    /// label is what comes back.
    pub fn value_of(&self, label: &str) -> Option<&Value> {
        if !self.prototype.has_label(label) {
            return None;
        }
        self.entries.get(label)
    }

    /// The label stored under `String(value)`, if `value` is a classic
    /// primitive and that key still holds a label.
    pub fn label_of(&self, value: &Value) -> Option<&str> {
        let primitive = value.as_classic_primitive()?;
        let label = self.entries.get(&primitive.to_key_string())?.as_str()?;
        self.prototype.has_label(label).then_some(label)
    }

    /// Own entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Own keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(PropertyKey::as_str)
    }

    /// Number of own entries (forward and reverse).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The helper record.
    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    pub fn all_labels(&self) -> &[String] {
        self.prototype.all_labels()
    }

    pub fn all_values(&self) -> &[Value] {
        self.prototype.all_values()
    }

    pub fn is_label(&self, arg: impl Into<Value>) -> bool {
        self.prototype.is_label(arg)
    }

    pub fn is_value(&self, arg: impl Into<Value>) -> bool {
        self.prototype.is_value(arg)
    }

    /// Helper names that also exist as own entries.
    ///
    /// With prototype-style lookup these entries would hide the helper of the
    /// same name; here both stay reachable, and this reports the overlap.
    pub fn shadowed_helpers(&self) -> Vec<&'static str> {
        HELPER_NAMES
            .into_iter()
            .filter(|name| self.entries.contains_key(name))
            .collect()
    }
}

impl Index<&str> for BiEnum {
    type Output = Value;

    /// Missing keys read as `undefined`.
    fn index(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&UNDEFINED)
    }
}

impl<'a> IntoIterator for &'a BiEnum {
    type Item = (&'a PropertyKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, PropertyKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes the own entries only.
impl Serialize for BiEnum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl From<&Definition> for BiEnum {
    fn from(definition: &Definition) -> Self {
        BiEnum::new(definition)
    }
}

#[cfg(test)]
#[path = "../tests/bienum_tests.rs"]
mod tests;
