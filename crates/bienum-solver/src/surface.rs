//! The full static surface of a bi-enum.
//!
//! For a definition type `T`:
//!
//! ```typescript
//! type Surface<T> = (EnsureStringKeys<T> & Flip<T>) & {
//!     allLabels: UnionToTuple<keyof EnsureStringKeys<T>>;
//!     allValues: UnionToTuple<T[keyof T]>;
//!     isLabel(arg: any): arg is keyof EnsureStringKeys<T>;
//!     isValue(arg: any): arg is T[keyof T];
//! };
//! ```
//!
//! `allValues` is converted from the value union, so duplicate values appear
//! once in the type even though the runtime array repeats them.

use bienum_runtime::{Definition, HELPER_NAMES};
use tracing::debug;

use crate::evaluate::TypeEvaluator;
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::lower::lower_definition;
use crate::property::{PropertyAccessResult, property_type};
use crate::types::{PropertyInfo, TypeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiEnumSurface {
    /// `T`, the definition as written with `as const`.
    pub definition: TypeId,
    /// Union of the labels as string literals.
    pub label_type: TypeId,
    /// Union of the value types.
    pub value_type: TypeId,
    /// `EnsureStringKeys<T>`.
    pub forward: TypeId,
    /// `Flip<T>`.
    pub flipped: TypeId,
    /// `EnsureStringKeys<T> & Flip<T>`: the own entries.
    pub instance: TypeId,
    pub all_labels: TypeId,
    pub all_values: TypeId,
    /// The helper record type.
    pub prototype: TypeId,
    /// `instance & prototype`.
    pub combined: TypeId,
    /// Helper names that are also own entries of the instance.
    pub shadowed_helpers: Vec<&'static str>,
}

impl BiEnumSurface {
    /// Infer the surface of an already lowered definition type.
    pub fn infer(interner: &TypeInterner, definition: TypeId) -> Self {
        let mut evaluator = TypeEvaluator::new(interner);

        let forward = evaluator.evaluate_ensure_string_keys(definition);
        let flipped = evaluator.evaluate_flip(definition);
        let instance = interner.intersection2(forward, flipped);

        let label_type = evaluator.evaluate_keyof(forward);
        let value_type = evaluator.evaluate_value_of(definition);
        let all_labels = evaluator.evaluate_union_to_tuple(label_type);
        let all_values = evaluator.evaluate_union_to_tuple(value_type);

        let prototype = interner.object(vec![
            PropertyInfo::new(interner.intern_string("allLabels"), all_labels),
            PropertyInfo::new(interner.intern_string("allValues"), all_values),
            PropertyInfo::new(
                interner.intern_string("isLabel"),
                interner.type_predicate(label_type),
            ),
            PropertyInfo::new(
                interner.intern_string("isValue"),
                interner.type_predicate(value_type),
            ),
        ]);
        let combined = interner.intersection2(instance, prototype);

        let shadowed_helpers = HELPER_NAMES
            .into_iter()
            .filter(|name| {
                matches!(
                    property_type(interner, instance, name),
                    PropertyAccessResult::Success { .. }
                )
            })
            .collect::<Vec<_>>();

        debug!(
            definition = definition.0,
            combined = combined.0,
            shadowed = shadowed_helpers.len(),
            "inferred bi-enum surface"
        );

        BiEnumSurface {
            definition,
            label_type,
            value_type,
            forward,
            flipped,
            instance,
            all_labels,
            all_values,
            prototype,
            combined,
            shadowed_helpers,
        }
    }

    /// Lower `definition` and infer its surface.
    pub fn from_definition(interner: &TypeInterner, definition: &Definition) -> Self {
        let lowered = lower_definition(interner, definition);
        Self::infer(interner, lowered)
    }

    /// `(name, formatted type)` rows for display.
    pub fn describe(&self, interner: &TypeInterner) -> Vec<(&'static str, String)> {
        let formatter = TypeFormatter::new(interner);
        vec![
            ("definition", formatter.format(self.definition)),
            ("labels", formatter.format(self.label_type)),
            ("values", formatter.format(self.value_type)),
            ("forward", formatter.format(self.forward)),
            ("flipped", formatter.format(self.flipped)),
            ("allLabels", formatter.format(self.all_labels)),
            ("allValues", formatter.format(self.all_values)),
            ("instance", formatter.format(self.combined)),
        ]
    }
}

#[cfg(test)]
#[path = "../tests/surface_tests.rs"]
mod tests;
