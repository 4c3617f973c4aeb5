//! Key stringification: `{[K in keyof T as ToString<K>]: T[K]}`.
//!
//! Every property keeps its type; numeric names become string names, so
//! `keyof` of the result is a union of string literals only. Numeric names
//! are never widened to `number`.

use crate::evaluate::TypeEvaluator;
use crate::types::{PropertyInfo, TypeData, TypeId};

impl<'a> TypeEvaluator<'a> {
    pub fn evaluate_ensure_string_keys(&mut self, mapping: TypeId) -> TypeId {
        let interner = self.interner();
        match interner.lookup(mapping) {
            Some(TypeData::Object(_)) => {
                let properties = interner
                    .object_properties(mapping)
                    .into_iter()
                    .map(|prop| PropertyInfo::new(prop.name, prop.type_id))
                    .collect();
                interner.object(properties)
            }
            Some(TypeData::Union(list)) => {
                let members = interner.type_list(list);
                let mapped = members
                    .iter()
                    .map(|&member| self.evaluate_ensure_string_keys(member))
                    .collect();
                interner.union(mapped)
            }
            Some(TypeData::Intersection(list)) => {
                let members = interner.type_list(list);
                let mapped = members
                    .iter()
                    .map(|&member| self.evaluate_ensure_string_keys(member))
                    .collect();
                interner.intersection(mapped)
            }
            // Homomorphic mapping leaves primitives, arrays and tuples alone.
            _ => mapping,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/key_remap_tests.rs"]
mod tests;
