//! Narrowing by type guards.
//!
//! `if (Direction.isValue(test)) { ... }` narrows `test` to the value union
//! inside the branch. A guard is either a type predicate
//! (`(arg: any) => arg is T`) or the guarded type `T` itself.

use tracing::{Level, span, trace};

use crate::intern::TypeInterner;
use crate::relations::SubtypeChecker;
use crate::types::{TypeData, TypeId};

pub struct NarrowingContext<'a> {
    interner: &'a TypeInterner,
}

impl<'a> NarrowingContext<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        NarrowingContext { interner }
    }

    fn guarded_type(&self, guard: TypeId) -> TypeId {
        match self.interner.lookup(guard) {
            Some(TypeData::TypePredicate(guarded)) => guarded,
            _ => guard,
        }
    }

    /// The type of a value of type `declared` in the branch where `guard`
    /// returned `true`.
    ///
    /// Members of `declared` that already satisfy the guard are kept;
    /// wider members (`number` against `1 | 2`) are replaced by the guard
    /// members they contain.
    pub fn narrow_to_guard(&self, declared: TypeId, guard: TypeId) -> TypeId {
        let guarded = self.guarded_type(guard);
        let _span = span!(
            Level::TRACE,
            "narrow_to_guard",
            declared = declared.0,
            guarded = guarded.0
        )
        .entered();

        if declared == TypeId::ANY || declared == TypeId::UNKNOWN {
            trace!("declared type is top, narrowing to the guarded type");
            return guarded;
        }

        let interner = self.interner;
        let mut checker = SubtypeChecker::new(interner);
        let guard_members = interner.union_members(guarded);
        let mut narrowed = Vec::new();
        for member in interner.union_members(declared) {
            if checker.is_subtype_of(member, guarded) {
                narrowed.push(member);
                continue;
            }
            narrowed.extend(
                guard_members
                    .iter()
                    .copied()
                    .filter(|&candidate| checker.is_subtype_of(candidate, member)),
            );
        }
        interner.union(narrowed)
    }

    /// The type in the branch where `guard` returned `false`.
    ///
    /// Only members wholly covered by the guard are removed: `number`
    /// stays `number` after `!isValue(test)`.
    pub fn narrow_excluding_guard(&self, declared: TypeId, guard: TypeId) -> TypeId {
        let guarded = self.guarded_type(guard);
        if declared == TypeId::ANY || declared == TypeId::UNKNOWN {
            return declared;
        }

        let interner = self.interner;
        let mut checker = SubtypeChecker::new(interner);
        let kept = interner
            .union_members(declared)
            .into_iter()
            .filter(|&member| !checker.is_subtype_of(member, guarded))
            .collect();
        interner.union(kept)
    }
}

/// Narrow `declared` by `guard` in its true branch.
pub fn narrow_by_guard(interner: &TypeInterner, declared: TypeId, guard: TypeId) -> TypeId {
    NarrowingContext::new(interner).narrow_to_guard(declared, guard)
}

#[cfg(test)]
#[path = "../tests/narrowing_tests.rs"]
mod tests;
