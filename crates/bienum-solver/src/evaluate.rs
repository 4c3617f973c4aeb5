//! Type-level evaluation.
//!
//! The evaluator owns the recursion state for one evaluation. Individual
//! operations live in `evaluate_rules/`, each as an `impl TypeEvaluator`
//! block:
//!
//! - `keyof`: `keyof T` and `T[K]`
//! - `template_literal`: `` `${T}` `` over classic primitives
//! - `key_remap`: string-keyed copies of a mapping
//! - `flip`: key/value inversion
//! - `union_tuple`: union → ordered tuple

use crate::intern::TypeInterner;
use crate::recursion::DepthCounter;
use crate::types::TypeId;

pub struct TypeEvaluator<'a> {
    interner: &'a TypeInterner,
    pub(crate) depth: DepthCounter,
}

impl<'a> TypeEvaluator<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeEvaluator {
            interner,
            depth: DepthCounter::default(),
        }
    }

    pub fn with_max_depth(interner: &'a TypeInterner, max_depth: u32) -> Self {
        TypeEvaluator {
            interner,
            depth: DepthCounter::new(max_depth),
        }
    }

    #[inline]
    pub fn interner(&self) -> &'a TypeInterner {
        self.interner
    }

    /// Whether any evaluation so far hit the depth limit.
    pub fn is_depth_exceeded(&self) -> bool {
        self.depth.is_exceeded()
    }
}

/// `{[K in keyof T as ToString<T[K]>]: ToString<K>}`.
pub fn flip_mapping(interner: &TypeInterner, mapping: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_flip(mapping)
}

/// `{[K in keyof T as ToString<K>]: T[K]}`.
pub fn ensure_string_keys(interner: &TypeInterner, mapping: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_ensure_string_keys(mapping)
}

/// `` `${T}` `` for classic primitives, `never` otherwise.
pub fn to_string_literal_type(interner: &TypeInterner, type_id: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_to_string(type_id)
}

pub fn keyof(interner: &TypeInterner, type_id: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_keyof(type_id)
}

/// `T[keyof T]`.
pub fn value_of(interner: &TypeInterner, type_id: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_value_of(type_id)
}

pub fn union_to_tuple(interner: &TypeInterner, union: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_union_to_tuple(union)
}

pub fn last_in_union(interner: &TypeInterner, union: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_last_in_union(union)
}

/// `Exclude<T, U>`.
pub fn exclude_from_union(interner: &TypeInterner, union: TypeId, excluded: TypeId) -> TypeId {
    TypeEvaluator::new(interner).evaluate_exclude(union, excluded)
}
