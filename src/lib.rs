//! Bidirectional enums.
//!
//! A bi-enum maps labels to values and primitive values back to labels.
//! This crate ties together the runtime constructor ([`bienum_runtime`]) and
//! the type-level model of the result ([`bienum_solver`]):
//!
//! ```
//! use bienum::{Definition, TypeFormatter, TypeInterner, Value, infer_bi_enum_type, to_bi_enum};
//!
//! let definition = Definition::new().entry("Up", 1).entry("Down", 2);
//!
//! let direction = to_bi_enum(&definition);
//! assert_eq!(direction["Up"], Value::Number(1.0));
//! assert_eq!(direction["2"], Value::from("Down"));
//!
//! let interner = TypeInterner::new();
//! let surface = infer_bi_enum_type(&interner, &definition);
//! let fmt = TypeFormatter::new(&interner);
//! assert_eq!(fmt.format(surface.flipped), r#"{ "1": "Up"; "2": "Down"; }"#);
//! ```
//!
//! Logging goes through `tracing`; see [`tracing_config`].

pub mod tracing_config;

pub use bienum_common as common;
pub use bienum_runtime as runtime;
pub use bienum_solver as solver;

pub use bienum_runtime::{
    BiEnum, BiEnumType, Definition, DefinitionError, HELPER_NAMES, PropertyKey, Prototype, RegExp,
    Value, bi_enum, is_classic_primitive,
};
pub use bienum_solver::{
    BiEnumSurface, PropertyAccessResult, SubtypeFailureReason, TypeDiagnostic, TypeFormatter,
    TypeId, TypeInterner, explain_assignability_failure, is_assignable_to, narrow_by_guard,
    property_type,
};

/// Build the bi-enum for `definition`.
///
/// Every label maps to its value. Each value that is a classic primitive
/// also maps back to its label under the value's string form.
pub fn to_bi_enum(definition: &Definition) -> BiEnum {
    BiEnum::new(definition)
}

/// The static type `to_bi_enum(definition)` would have.
pub fn infer_bi_enum_type(interner: &TypeInterner, definition: &Definition) -> BiEnumSurface {
    BiEnumSurface::from_definition(interner, definition)
}
