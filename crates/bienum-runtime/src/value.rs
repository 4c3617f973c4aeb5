//! Dynamic values stored in definitions and bi-enum instances.
//!
//! `Value` models the value side of a definition entry. Primitives are held
//! inline; reference values (arrays, objects, regexes, functions, symbols)
//! are held behind an `Arc` so that cloning a value keeps its identity, the
//! same way copying a reference does. Equality is SameValueZero: primitives
//! compare by value (`NaN` equals `NaN`, `+0` equals `-0`), reference values
//! compare by identity.

use std::fmt;
use std::sync::Arc;

use bienum_common::js_number_to_string;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::property_key::PropertyMap;

/// A regular expression literal. Only its spelling is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegExp {
    pub source: String,
    pub flags: String,
}

impl RegExp {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Arbitrary-precision integers are out of reach; `i128` covers the
    /// bigint literals a definition realistically carries.
    BigInt(i128),
    /// A symbol with its optional description.
    Symbol(Arc<Option<String>>),
    Array(Arc<Vec<Value>>),
    Object(Arc<PropertyMap<Value>>),
    RegExp(Arc<RegExp>),
    /// A function, known only by its name.
    Function(Arc<str>),
}

/// Borrowed view of a value that is a classic primitive.
///
/// Produced by [`Value::as_classic_primitive`]; the only values that can
/// become reverse-direction keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassicPrimitive<'a> {
    String(&'a str),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

impl ClassicPrimitive<'_> {
    /// `String(x)` for the primitive.
    pub fn to_key_string(self) -> String {
        match self {
            ClassicPrimitive::String(s) => s.to_string(),
            ClassicPrimitive::Number(n) => js_number_to_string(n),
            ClassicPrimitive::Boolean(b) => b.to_string(),
            ClassicPrimitive::Null => "null".to_string(),
            ClassicPrimitive::Undefined => "undefined".to_string(),
        }
    }
}

/// Returns true for string, number, boolean, null and undefined.
///
/// Objects, arrays, regexes, functions, bigints and symbols are not classic
/// primitives.
pub fn is_classic_primitive(value: &Value) -> bool {
    value.as_classic_primitive().is_some()
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    pub fn object(properties: PropertyMap<Value>) -> Self {
        Value::Object(Arc::new(properties))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Arc::new(RegExp::new(source, flags)))
    }

    pub fn function(name: &str) -> Self {
        Value::Function(Arc::from(name))
    }

    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Arc::new(description.map(str::to_string)))
    }

    pub fn as_classic_primitive(&self) -> Option<ClassicPrimitive<'_>> {
        match self {
            Value::String(s) => Some(ClassicPrimitive::String(s)),
            Value::Number(n) => Some(ClassicPrimitive::Number(*n)),
            Value::Boolean(b) => Some(ClassicPrimitive::Boolean(*b)),
            Value::Null => Some(ClassicPrimitive::Null),
            Value::Undefined => Some(ClassicPrimitive::Undefined),
            Value::BigInt(_)
            | Value::Symbol(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::RegExp(_)
            | Value::Function(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The `typeof` spelling of the value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) | Value::RegExp(_) => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
        }
    }

    /// `String(value)`.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => js_number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::BigInt(n) => n.to_string(),
            Value::Symbol(description) => {
                format!("Symbol({})", description.as_deref().unwrap_or(""))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::RegExp(regexp) => regexp.to_string(),
            Value::Function(name) => format!("function {name}() {{ [native code] }}"),
        }
    }

    /// SameValueZero comparison, the equality used by membership checks.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(properties) => {
                f.write_str("{")?;
                for (i, (key, value)) in properties.iter().enumerate() {
                    f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(f, "{}: {value}", key.as_str())?;
                }
                f.write_str(if properties.is_empty() { "}" } else { " }" })
            }
            other => f.write_str(&other.to_js_string()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
                serializer.serialize_unit()
            }
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Value::RegExp(regexp) => serializer.collect_str(regexp),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(properties) => {
                let mut map = serializer.serialize_map(Some(properties.len()))?;
                for (key, value) in properties.iter() {
                    map.serialize_entry(key.as_str(), value)?;
                }
                map.end()
            }
        }
    }
}

/// Integral and within `Number.MAX_SAFE_INTEGER`, printed without a fraction.
fn is_safe_integer(n: f64) -> bool {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<RegExp> for Value {
    fn from(regexp: RegExp) -> Self {
        Value::RegExp(Arc::new(regexp))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
