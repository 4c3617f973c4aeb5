//! Diagnostics for failed type relations.
//!
//! The assignability check itself only answers yes or no. When a caller
//! needs to know why, [`crate::relations::explain_assignability_failure`]
//! re-runs the check and returns a [`SubtypeFailureReason`], which renders to
//! a [`TypeDiagnostic`] with TypeScript's codes and wording.

use std::fmt;

use bienum_common::Atom;

use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::TypeId;

/// Why `source` is not assignable to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubtypeFailureReason {
    /// Target requires a property the source lacks.
    MissingProperty {
        property_name: Atom,
        source_type: TypeId,
        target_type: TypeId,
    },
    /// Property types are incompatible.
    PropertyTypeMismatch {
        property_name: Atom,
        source_property_type: TypeId,
        target_property_type: TypeId,
        nested_reason: Option<Box<SubtypeFailureReason>>,
    },
    /// Tuple lengths differ.
    TupleElementMismatch {
        source_count: usize,
        target_count: usize,
    },
    TupleElementTypeMismatch {
        index: usize,
        source_element: TypeId,
        target_element: TypeId,
    },
    ArrayElementMismatch {
        source_element: TypeId,
        target_element: TypeId,
    },
    /// Source is readonly, target is mutable.
    ReadonlyToMutable {
        source_type: TypeId,
        target_type: TypeId,
    },
    NoUnionMemberMatches {
        source_type: TypeId,
        target_union_members: Vec<TypeId>,
    },
    LiteralTypeMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    IntrinsicTypeMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    TypeMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    RecursionLimitExceeded,
}

/// TypeScript diagnostic codes used by the type layer.
pub mod codes {
    /// Type '{0}' is not assignable to type '{1}'.
    pub const TYPE_NOT_ASSIGNABLE: u32 = 2322;
    /// Types of property '{0}' are incompatible.
    pub const NESTED_TYPE_MISMATCH: u32 = 2326;
    /// Object is possibly 'null'.
    pub const OBJECT_POSSIBLY_NULL: u32 = 2531;
    /// Object is possibly 'undefined'.
    pub const OBJECT_POSSIBLY_UNDEFINED: u32 = 2532;
    /// Object is possibly 'null' or 'undefined'.
    pub const OBJECT_POSSIBLY_NULL_OR_UNDEFINED: u32 = 2533;
    /// Property '{0}' does not exist on type '{1}'.
    pub const PROPERTY_NOT_EXIST: u32 = 2339;
    /// Object is of type 'unknown'.
    pub const OBJECT_IS_UNKNOWN: u32 = 2571;
    /// Type instantiation is excessively deep and possibly infinite.
    pub const INSTANTIATION_TOO_DEEP: u32 = 2589;
    /// Source has {0} element(s) but target requires {1}.
    pub const TUPLE_ARITY_MISMATCH: u32 = 2618;
    /// Property '{0}' is missing in type '{1}' but required in type '{2}'.
    pub const PROPERTY_MISSING: u32 = 2741;
    /// The type '{0}' is 'readonly' and cannot be assigned to the mutable type '{1}'.
    pub const READONLY_TO_MUTABLE: u32 = 4104;
}

/// A rendered diagnostic with optional elaborations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDiagnostic {
    pub message: String,
    pub code: u32,
    /// Elaborations, outermost first.
    pub related: Vec<TypeDiagnostic>,
}

impl TypeDiagnostic {
    pub fn error(message: impl Into<String>, code: u32) -> Self {
        TypeDiagnostic {
            message: message.into(),
            code,
            related: Vec::new(),
        }
    }

    pub fn with_related(mut self, related: TypeDiagnostic) -> Self {
        self.related.push(related);
        self
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}error TS{}: {}", "", self.code, self.message, indent = depth * 2)?;
        for related in &self.related {
            related.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Builder for type error diagnostics.
pub struct DiagnosticBuilder<'a> {
    interner: &'a TypeInterner,
    formatter: TypeFormatter<'a>,
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        DiagnosticBuilder {
            interner,
            formatter: TypeFormatter::new(interner),
        }
    }

    /// Create a "Type X is not assignable to type Y" diagnostic.
    pub fn type_not_assignable(&self, source: TypeId, target: TypeId) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!(
                "Type '{}' is not assignable to type '{}'.",
                self.formatter.format(source),
                self.formatter.format(target)
            ),
            codes::TYPE_NOT_ASSIGNABLE,
        )
    }

    pub fn property_missing(&self, property_name: Atom, source: TypeId, target: TypeId) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!(
                "Property '{}' is missing in type '{}' but required in type '{}'.",
                self.interner.resolve_atom(property_name),
                self.formatter.format(source),
                self.formatter.format(target)
            ),
            codes::PROPERTY_MISSING,
        )
    }

    pub fn property_not_exist(&self, property_name: &str, type_id: TypeId) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!(
                "Property '{}' does not exist on type '{}'.",
                property_name,
                self.formatter.format(type_id)
            ),
            codes::PROPERTY_NOT_EXIST,
        )
    }

    /// "Object is possibly ..." for the nullable part `cause` of an object type.
    pub fn object_possibly_nullish(&self, cause: TypeId) -> TypeDiagnostic {
        match cause {
            TypeId::NULL => TypeDiagnostic::error("Object is possibly 'null'.", codes::OBJECT_POSSIBLY_NULL),
            TypeId::UNDEFINED | TypeId::VOID => TypeDiagnostic::error(
                "Object is possibly 'undefined'.",
                codes::OBJECT_POSSIBLY_UNDEFINED,
            ),
            _ => TypeDiagnostic::error(
                "Object is possibly 'null' or 'undefined'.",
                codes::OBJECT_POSSIBLY_NULL_OR_UNDEFINED,
            ),
        }
    }

    pub fn object_is_unknown(&self) -> TypeDiagnostic {
        TypeDiagnostic::error("Object is of type 'unknown'.", codes::OBJECT_IS_UNKNOWN)
    }

    pub fn property_incompatible(&self, property_name: Atom) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!(
                "Types of property '{}' are incompatible.",
                self.interner.resolve_atom(property_name)
            ),
            codes::NESTED_TYPE_MISMATCH,
        )
    }

    pub fn instantiation_too_deep(&self) -> TypeDiagnostic {
        TypeDiagnostic::error(
            "Type instantiation is excessively deep and possibly infinite.",
            codes::INSTANTIATION_TOO_DEEP,
        )
    }

    pub fn tuple_arity_mismatch(&self, source_count: usize, target_count: usize) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!("Source has {source_count} element(s) but target requires {target_count}."),
            codes::TUPLE_ARITY_MISMATCH,
        )
    }

    pub fn readonly_to_mutable(&self, source: TypeId, target: TypeId) -> TypeDiagnostic {
        TypeDiagnostic::error(
            format!(
                "The type '{}' is 'readonly' and cannot be assigned to the mutable type '{}'.",
                self.formatter.format(source),
                self.formatter.format(target)
            ),
            codes::READONLY_TO_MUTABLE,
        )
    }
}

impl SubtypeFailureReason {
    /// Code of the diagnostic this reason renders to.
    pub fn diagnostic_code(&self) -> u32 {
        match self {
            SubtypeFailureReason::MissingProperty { .. } => codes::PROPERTY_MISSING,
            SubtypeFailureReason::RecursionLimitExceeded => codes::INSTANTIATION_TOO_DEEP,
            _ => codes::TYPE_NOT_ASSIGNABLE,
        }
    }

    /// Render this reason for the failed check `source` → `target`.
    pub fn to_diagnostic(&self, interner: &TypeInterner, source: TypeId, target: TypeId) -> TypeDiagnostic {
        let builder = DiagnosticBuilder::new(interner);
        match self {
            SubtypeFailureReason::MissingProperty {
                property_name,
                source_type,
                target_type,
            } => builder.property_missing(*property_name, *source_type, *target_type),

            SubtypeFailureReason::PropertyTypeMismatch {
                property_name,
                source_property_type,
                target_property_type,
                nested_reason,
            } => {
                let mut elaboration = builder.property_incompatible(*property_name);
                if let Some(nested) = nested_reason {
                    elaboration = elaboration.with_related(nested.to_diagnostic(
                        interner,
                        *source_property_type,
                        *target_property_type,
                    ));
                }
                builder
                    .type_not_assignable(source, target)
                    .with_related(elaboration)
            }

            SubtypeFailureReason::TupleElementMismatch {
                source_count,
                target_count,
            } => builder
                .type_not_assignable(source, target)
                .with_related(builder.tuple_arity_mismatch(*source_count, *target_count)),

            SubtypeFailureReason::TupleElementTypeMismatch {
                source_element,
                target_element,
                ..
            }
            | SubtypeFailureReason::ArrayElementMismatch {
                source_element,
                target_element,
            } => builder
                .type_not_assignable(source, target)
                .with_related(builder.type_not_assignable(*source_element, *target_element)),

            SubtypeFailureReason::ReadonlyToMutable {
                source_type,
                target_type,
            } => builder.readonly_to_mutable(*source_type, *target_type),

            SubtypeFailureReason::RecursionLimitExceeded => builder.instantiation_too_deep(),

            SubtypeFailureReason::NoUnionMemberMatches { .. }
            | SubtypeFailureReason::LiteralTypeMismatch { .. }
            | SubtypeFailureReason::IntrinsicTypeMismatch { .. }
            | SubtypeFailureReason::TypeMismatch { .. } => builder.type_not_assignable(source, target),
        }
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
