//! Property access on types: `Direction.Up`, `Direction[4]`.

use bienum_common::{Atom, js_number_to_string};

use crate::diagnostics::{DiagnosticBuilder, TypeDiagnostic};
use crate::evaluate::TypeEvaluator;
use crate::intern::TypeInterner;
use crate::types::TypeId;

/// Result of reading a property from a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyAccessResult {
    Success {
        type_id: TypeId,
    },
    PropertyNotFound {
        type_id: TypeId,
        property_name: Atom,
    },
    /// The object is possibly `null` or `undefined`.
    PossiblyNullOrUndefined {
        /// Type read from the non-nullable members, if any.
        property_type: Option<TypeId>,
        cause: TypeId,
    },
    IsUnknown,
}

impl PropertyAccessResult {
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            PropertyAccessResult::Success { type_id } => Some(*type_id),
            _ => None,
        }
    }

    /// The diagnostic for a failed access, `None` on success.
    pub fn to_diagnostic(&self, interner: &TypeInterner) -> Option<TypeDiagnostic> {
        let builder = DiagnosticBuilder::new(interner);
        match self {
            PropertyAccessResult::Success { .. } => None,
            PropertyAccessResult::PropertyNotFound {
                type_id,
                property_name,
            } => Some(builder.property_not_exist(&interner.resolve_atom(*property_name), *type_id)),
            PropertyAccessResult::PossiblyNullOrUndefined { cause, .. } => {
                Some(builder.object_possibly_nullish(*cause))
            }
            PropertyAccessResult::IsUnknown => Some(builder.object_is_unknown()),
        }
    }
}

/// The type of `object[name]`.
///
/// Names are property keys, so a number reads the property named by its
/// string form: `property_type(t, "4")` is `t[4]`.
pub fn property_type(interner: &TypeInterner, object: TypeId, name: &str) -> PropertyAccessResult {
    if object == TypeId::UNKNOWN {
        return PropertyAccessResult::IsUnknown;
    }
    if object == TypeId::ANY || object == TypeId::ERROR {
        return PropertyAccessResult::Success { type_id: object };
    }

    let atom = interner.intern_string(name);
    let key = interner.literal_string_atom(atom);
    let mut evaluator = TypeEvaluator::new(interner);

    let mut nullish = Vec::new();
    let mut found = Vec::new();
    for member in interner.union_members(object) {
        if matches!(member, TypeId::NULL | TypeId::UNDEFINED | TypeId::VOID) {
            nullish.push(member);
            continue;
        }
        match evaluator.evaluate_index_access(member, key) {
            Some(type_id) => found.push(type_id),
            None => {
                return PropertyAccessResult::PropertyNotFound {
                    type_id: object,
                    property_name: atom,
                };
            }
        }
    }

    if !nullish.is_empty() {
        return PropertyAccessResult::PossiblyNullOrUndefined {
            property_type: (!found.is_empty()).then(|| interner.union(found)),
            cause: interner.union(nullish),
        };
    }
    PropertyAccessResult::Success {
        type_id: interner.union(found),
    }
}

/// [`property_type`] with a numeric key.
pub fn property_type_by_index(interner: &TypeInterner, object: TypeId, index: f64) -> PropertyAccessResult {
    property_type(interner, object, &js_number_to_string(index))
}

#[cfg(test)]
#[path = "../tests/property_tests.rs"]
mod tests;
