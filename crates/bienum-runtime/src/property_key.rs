//! Property keys and the ordered property map behind definitions and
//! bi-enum instances.
//!
//! Keys are always strings: numeric keys are coerced with `String(n)` when
//! the key is created. Enumeration follows own-property order: array-index
//! keys first in ascending numeric order, then every other key in insertion
//! order. Replacing the value of an existing key keeps its position.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use bienum_common::{is_array_index, js_number_to_string};
use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// A string-coerced property key.
#[derive(Clone)]
pub struct PropertyKey {
    name: String,
    array_index: Option<u32>,
}

impl PropertyKey {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let array_index = is_array_index(&name);
        PropertyKey { name, array_index }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The numeric index if this key is an array index (`"0"`, `"1234"`).
    pub fn array_index(&self) -> Option<u32> {
        self.array_index
    }
}

impl PartialEq for PropertyKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PropertyKey {}

// Hash must agree with `str` so maps can be queried with `&str`.
impl Hash for PropertyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::new(name)
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::new(name)
    }
}

impl From<&String> for PropertyKey {
    fn from(name: &String) -> Self {
        PropertyKey::new(name.as_str())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(key: &PropertyKey) -> Self {
        key.clone()
    }
}

/// `instance[value]` coerces the value with `String(value)`.
impl From<&Value> for PropertyKey {
    fn from(value: &Value) -> Self {
        PropertyKey::new(value.to_js_string())
    }
}

impl From<f64> for PropertyKey {
    fn from(n: f64) -> Self {
        PropertyKey::new(js_number_to_string(n))
    }
}

impl From<bool> for PropertyKey {
    fn from(b: bool) -> Self {
        PropertyKey::new(b.to_string())
    }
}

macro_rules! impl_key_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyKey {
                fn from(n: $ty) -> Self {
                    PropertyKey::new(n.to_string())
                }
            }
        )*
    };
}

impl_key_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Insertion-ordered map that enumerates array-index keys first.
#[derive(Clone)]
pub struct PropertyMap<V> {
    entries: IndexMap<PropertyKey, V>,
    /// Number of leading array-index keys, kept sorted ascending.
    index_count: usize,
}

impl<V> PropertyMap<V> {
    pub fn new() -> Self {
        PropertyMap {
            entries: IndexMap::new(),
            index_count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap {
            entries: IndexMap::with_capacity(capacity),
            index_count: 0,
        }
    }

    /// Set `key` to `value`, returning the previous value.
    ///
    /// A new array-index key is placed among the leading index keys by
    /// numeric order; any other new key goes last. An existing key keeps its
    /// position.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(slot) = self.entries.get_mut(key.as_str()) {
            return Some(std::mem::replace(slot, value));
        }

        match key.array_index() {
            Some(index) => {
                let position = self.index_position(index);
                self.entries.shift_insert(position, key, value);
                self.index_count += 1;
            }
            None => {
                self.entries.insert(key, value);
            }
        }
        None
    }

    /// Binary search for the slot of `index` among the leading index keys.
    fn index_position(&self, index: u32) -> usize {
        let (mut lo, mut hi) = (0, self.index_count);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let mid_index = self
                .entries
                .get_index(mid)
                .and_then(|(key, _)| key.array_index())
                .unwrap_or(u32::MAX);
            if mid_index < index {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> Iter<'_, PropertyKey, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Default for PropertyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for PropertyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<PropertyKey>, V> FromIterator<(K, V)> for PropertyMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = PropertyMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, V> IntoIterator for &'a PropertyMap<V> {
    type Item = (&'a PropertyKey, &'a V);
    type IntoIter = Iter<'a, PropertyKey, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Serialize> Serialize for PropertyMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../tests/property_key_tests.rs"]
mod tests;
