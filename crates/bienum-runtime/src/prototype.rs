//! The helper record shared by a bi-enum instance.

use serde::Serialize;

use crate::value::Value;

/// Names of the four helpers, in the spelling the instance exposes them.
pub const HELPER_NAMES: [&str; 4] = ["allLabels", "allValues", "isLabel", "isValue"];

/// Labels and values of a definition plus membership predicates over them.
///
/// Created together with its instance and never changed afterwards. It is
/// not part of the instance's own entries, so it never shows up when the
/// instance is iterated or serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prototype {
    all_labels: Vec<String>,
    all_values: Vec<Value>,
}

impl Prototype {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Prototype {
            all_labels: Vec::with_capacity(capacity),
            all_values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, label: &str, value: &Value) {
        self.all_labels.push(label.to_string());
        self.all_values.push(value.clone());
    }

    /// Every label, in definition order.
    pub fn all_labels(&self) -> &[String] {
        &self.all_labels
    }

    /// Every value, in definition order. Duplicates are kept.
    pub fn all_values(&self) -> &[Value] {
        &self.all_values
    }

    /// Whether `arg` is one of the labels.
    ///
    /// Labels are strings, so a number never matches even when its string
    /// form does: `is_label(2)` is false for a label `"2"`.
    pub fn is_label(&self, arg: impl Into<Value>) -> bool {
        match arg.into() {
            Value::String(s) => self.has_label(&s),
            _ => false,
        }
    }

    /// Borrowed form of [`Prototype::is_label`] for string arguments.
    pub fn has_label(&self, label: &str) -> bool {
        self.all_labels.iter().any(|l| l == label)
    }

    /// Whether `arg` is one of the values, compared with SameValueZero.
    pub fn is_value(&self, arg: impl Into<Value>) -> bool {
        let arg = arg.into();
        self.all_values.iter().any(|v| v.same_value_zero(&arg))
    }

    pub fn len(&self) -> usize {
        self.all_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_labels.is_empty()
    }
}
