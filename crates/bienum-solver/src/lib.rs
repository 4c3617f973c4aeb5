//! Type-level layer for bi-enums.
//!
//! Models the static types of a bi-enum with an interned structural type
//! representation:
//!
//! - **Interning**: every type is a [`TypeId`]; identical structures share one
//!   id, so equality is an integer comparison.
//! - **Evaluation**: flip, key stringification, `` `${T}` `` and
//!   union-to-tuple are evaluated eagerly over interned types.
//! - **Relations**: structural assignability with TypeScript-style
//!   diagnostics, property access and guard narrowing.
//!
//! ```
//! use bienum_runtime::Definition;
//! use bienum_solver::{BiEnumSurface, TypeFormatter, TypeInterner};
//!
//! let interner = TypeInterner::new();
//! let definition = Definition::new().entry("Up", 1).entry("Down", 2);
//! let surface = BiEnumSurface::from_definition(&interner, &definition);
//!
//! let fmt = TypeFormatter::new(&interner);
//! assert_eq!(fmt.format(surface.flipped), r#"{ "1": "Up"; "2": "Down"; }"#);
//! ```

pub mod diagnostics;
mod evaluate;
pub mod evaluate_rules;
mod format;
mod intern;
pub mod lower;
pub mod narrowing;
pub mod property;
pub mod recursion;
pub mod relations;
mod surface;
pub mod types;

pub use diagnostics::{SubtypeFailureReason, TypeDiagnostic};
pub use evaluate::{
    TypeEvaluator, ensure_string_keys, exclude_from_union, flip_mapping, keyof, last_in_union,
    to_string_literal_type, union_to_tuple, value_of,
};
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use lower::{lower_definition, lower_value};
pub use narrowing::{NarrowingContext, narrow_by_guard};
pub use property::{PropertyAccessResult, property_type, property_type_by_index};
pub use relations::{SubtypeChecker, explain_assignability_failure, is_assignable_to};
pub use surface::BiEnumSurface;
pub use types::{IntrinsicKind, LiteralValue, PropertyInfo, PropertyNameKind, TypeData, TypeId};
