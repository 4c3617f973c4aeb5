//! Key/value inversion: `{[K in keyof T as ToString<T[K]>]: ToString<K>}`.
//!
//! Each property contributes one flipped property per member of the string
//! form of its type. Properties whose type has no string form (objects,
//! regexes, bigints, symbols) map to a `never` key and disappear. When two
//! properties flip onto the same key the flipped property is the union of
//! both names, where the runtime instance would keep only the last.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use bienum_common::Atom;

use crate::evaluate::TypeEvaluator;
use crate::types::{LiteralValue, PropertyInfo, TypeData, TypeId};

impl<'a> TypeEvaluator<'a> {
    pub fn evaluate_flip(&mut self, mapping: TypeId) -> TypeId {
        let interner = self.interner();
        match interner.lookup(mapping) {
            Some(TypeData::Object(_)) => self.flip_object(mapping),
            Some(TypeData::Union(list)) => {
                let members = interner.type_list(list);
                let flipped = members
                    .iter()
                    .map(|&member| self.evaluate_flip(member))
                    .collect();
                interner.union(flipped)
            }
            Some(TypeData::Error) => TypeId::ERROR,
            _ => interner.object(Vec::new()),
        }
    }

    fn flip_object(&mut self, object: TypeId) -> TypeId {
        let interner = self.interner();
        let mut order: Vec<Atom> = Vec::new();
        let mut names_by_key: FxHashMap<Atom, Vec<TypeId>> = FxHashMap::default();

        for prop in interner.object_properties(object) {
            let keys = self.evaluate_to_string(prop.type_id);
            let name = interner.literal_string_atom(prop.name);
            let key_members = interner.union_members(keys);
            if key_members.is_empty() {
                trace!(
                    property = &*interner.resolve_atom(prop.name),
                    "value has no string form, dropped from flip"
                );
            }

            for key in key_members {
                let Some(TypeData::Literal(LiteralValue::String(atom))) = interner.lookup(key)
                else {
                    trace!(
                        property = &*interner.resolve_atom(prop.name),
                        "non-literal flipped key, dropped from flip"
                    );
                    continue;
                };
                names_by_key
                    .entry(atom)
                    .or_insert_with(|| {
                        order.push(atom);
                        Vec::new()
                    })
                    .push(name);
            }
        }

        let properties: Vec<PropertyInfo> = order
            .into_iter()
            .map(|key| {
                let names = names_by_key.remove(&key).unwrap_or_default();
                PropertyInfo::new(key, interner.union(names))
            })
            .collect();
        debug!(properties = properties.len(), "flipped mapping");
        interner.object(properties)
    }
}

#[cfg(test)]
#[path = "../../tests/flip_tests.rs"]
mod tests;
