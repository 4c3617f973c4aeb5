//! keyof operator and indexed access.
//!
//! `keyof T` and `T[K]` over object types.

use bienum_common::js_number_to_string;
use tracing::trace;

use crate::evaluate::TypeEvaluator;
use crate::types::{LiteralValue, PropertyInfo, PropertyNameKind, TypeData, TypeId};

impl<'a> TypeEvaluator<'a> {
    /// The literal type naming a property: `1234` for a numeric name,
    /// `"Up"` otherwise.
    pub fn property_key_type(&self, prop: &PropertyInfo) -> TypeId {
        let interner = self.interner();
        match prop.name_kind {
            PropertyNameKind::String => interner.literal_string_atom(prop.name),
            PropertyNameKind::Numeric => {
                let name = interner.resolve_atom(prop.name);
                match name.parse::<f64>() {
                    Ok(value) => interner.literal_number(value),
                    Err(_) => interner.literal_string_atom(prop.name),
                }
            }
        }
    }

    /// Evaluate `keyof T`.
    pub fn evaluate_keyof(&mut self, operand: TypeId) -> TypeId {
        let interner = self.interner();
        if operand == TypeId::ANY || operand == TypeId::NEVER {
            return interner.union(vec![TypeId::STRING, TypeId::NUMBER, TypeId::SYMBOL]);
        }

        match interner.lookup(operand) {
            Some(TypeData::Object(_)) => {
                let keys = interner
                    .object_properties(operand)
                    .iter()
                    .map(|prop| self.property_key_type(prop))
                    .collect();
                interner.union(keys)
            }
            // keyof (A | B) = keyof A & keyof B
            Some(TypeData::Union(list)) => {
                let members = interner.type_list(list);
                let key_sets: Vec<Vec<TypeId>> = members
                    .iter()
                    .map(|&member| {
                        let keys = self.evaluate_keyof(member);
                        interner.union_members(keys)
                    })
                    .collect();
                let Some((first, rest)) = key_sets.split_first() else {
                    return TypeId::NEVER;
                };
                let common = first
                    .iter()
                    .copied()
                    .filter(|key| rest.iter().all(|set| set.contains(key)))
                    .collect();
                interner.union(common)
            }
            // keyof (A & B) = keyof A | keyof B
            Some(TypeData::Intersection(list)) => {
                let members = interner.type_list(list);
                let keys = members
                    .iter()
                    .map(|&member| self.evaluate_keyof(member))
                    .collect();
                interner.union(keys)
            }
            Some(TypeData::ReadonlyType(inner)) => self.evaluate_keyof(inner),
            Some(TypeData::Array(_) | TypeData::Tuple(_)) => TypeId::NUMBER,
            Some(TypeData::Error) => TypeId::ERROR,
            _ => {
                trace!(type_id = operand.0, "keyof of a type without known keys");
                TypeId::NEVER
            }
        }
    }

    /// Evaluate `T[K]`. `None` when some key in `K` is not a property of `T`.
    pub fn evaluate_index_access(&mut self, object: TypeId, key: TypeId) -> Option<TypeId> {
        let interner = self.interner();
        if object == TypeId::ERROR || key == TypeId::ERROR {
            return Some(TypeId::ERROR);
        }
        if object == TypeId::ANY {
            return Some(TypeId::ANY);
        }

        let key_members = interner.union_members(key);
        if key_members.len() != 1 {
            let mut results = Vec::with_capacity(key_members.len());
            for member in key_members {
                results.push(self.evaluate_index_access(object, member)?);
            }
            return Some(interner.union(results));
        }

        match interner.lookup(object)? {
            TypeData::Object(shape) => {
                let name = match interner.lookup(key)? {
                    TypeData::Literal(LiteralValue::String(atom)) => atom,
                    TypeData::Literal(LiteralValue::Number(value)) => {
                        interner.intern_string(&js_number_to_string(value.0))
                    }
                    _ => return None,
                };
                interner.find_property(shape, name).map(|prop| prop.type_id)
            }
            TypeData::Union(list) => {
                let members = interner.type_list(list);
                let mut results = Vec::with_capacity(members.len());
                for &member in members.iter() {
                    results.push(self.evaluate_index_access(member, key)?);
                }
                Some(interner.union(results))
            }
            TypeData::Intersection(list) => {
                let members = interner.type_list(list);
                let found: Vec<TypeId> = members
                    .iter()
                    .filter_map(|&member| self.evaluate_index_access(member, key))
                    .collect();
                if found.is_empty() {
                    None
                } else {
                    Some(interner.intersection(found))
                }
            }
            _ => None,
        }
    }

    /// Evaluate `T[keyof T]`: the union of every property type.
    pub fn evaluate_value_of(&mut self, operand: TypeId) -> TypeId {
        let interner = self.interner();
        match interner.lookup(operand) {
            Some(TypeData::Object(_)) => {
                let values = interner
                    .object_properties(operand)
                    .iter()
                    .map(|prop| prop.type_id)
                    .collect();
                interner.union(values)
            }
            Some(TypeData::Union(list)) => {
                let members = interner.type_list(list);
                let values = members
                    .iter()
                    .map(|&member| self.evaluate_value_of(member))
                    .collect();
                interner.union(values)
            }
            Some(TypeData::Error) => TypeId::ERROR,
            _ => TypeId::NEVER,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/keyof_tests.rs"]
mod tests;
