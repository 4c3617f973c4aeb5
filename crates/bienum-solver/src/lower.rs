//! Lowering runtime definitions to types.
//!
//! A definition is typed the way a TypeScript object literal written with
//! `as const` is: every primitive keeps its literal type, arrays become
//! readonly tuples and nested objects keep their literal properties.

use bienum_common::is_numeric_literal_name;
use bienum_runtime::{Definition, Value};
use tracing::debug;

use crate::intern::TypeInterner;
use crate::types::{PropertyInfo, TypeId};

/// The `as const` type of a whole definition.
///
/// Labels spelled as canonical numbers (`1234`) are recorded as numeric
/// property names, as if written unquoted in an object literal.
pub fn lower_definition(interner: &TypeInterner, definition: &Definition) -> TypeId {
    let properties = definition
        .iter()
        .map(|(label, value)| lower_property(interner, label, value))
        .collect::<Vec<_>>();
    let type_id = interner.object(properties);
    debug!(entries = definition.len(), type_id = type_id.0, "lowered definition");
    type_id
}

fn lower_property(interner: &TypeInterner, name: &str, value: &Value) -> PropertyInfo {
    let atom = interner.intern_string(name);
    let type_id = lower_value(interner, value);
    if is_numeric_literal_name(name) {
        PropertyInfo::numeric(atom, type_id)
    } else {
        PropertyInfo::new(atom, type_id)
    }
}

/// The `as const` type of a single value.
pub fn lower_value(interner: &TypeInterner, value: &Value) -> TypeId {
    match value {
        Value::Undefined => TypeId::UNDEFINED,
        Value::Null => TypeId::NULL,
        Value::Boolean(b) => interner.literal_boolean(*b),
        // `NaN` and the infinities have no literal type.
        Value::Number(n) if !n.is_finite() => TypeId::NUMBER,
        Value::Number(n) => interner.literal_number(*n),
        Value::String(s) => interner.literal_string(s),
        Value::BigInt(n) => interner.literal_bigint(&n.to_string()),
        Value::Symbol(_) => TypeId::SYMBOL,
        Value::Array(items) => {
            let elements: Vec<TypeId> = items.iter().map(|item| lower_value(interner, item)).collect();
            let tuple = interner.tuple_of(&elements);
            interner.readonly(tuple)
        }
        Value::Object(properties) => interner.object(
            properties
                .iter()
                .map(|(key, value)| lower_property(interner, key.as_str(), value))
                .collect(),
        ),
        Value::RegExp(_) => interner.reference("RegExp"),
        Value::Function(_) => interner.reference("Function"),
    }
}

#[cfg(test)]
#[path = "../tests/lower_tests.rs"]
mod tests;
