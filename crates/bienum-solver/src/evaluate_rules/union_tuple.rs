//! Union → tuple conversion.
//!
//! ```typescript
//! type UnionToTuple<U, Last = LastInUnion<U>> = [U] extends [never]
//!     ? []
//!     : [...UnionToTuple<Exclude<U, Last>>, Last];
//! ```
//!
//! The tuple lists each member exactly once. Member order is the interner's
//! canonical union order, not the order the members were written in.

use bienum_common::limits::MAX_UNION_TO_TUPLE_MEMBERS;
use tracing::{debug, trace};

use crate::evaluate::TypeEvaluator;
use crate::relations::is_assignable_to;
use crate::types::TypeId;

impl<'a> TypeEvaluator<'a> {
    /// The member a union-to-tuple step peels off: the last one in canonical
    /// order. `never` for `never`.
    pub fn evaluate_last_in_union(&mut self, union: TypeId) -> TypeId {
        self.interner()
            .union_members(union)
            .last()
            .copied()
            .unwrap_or(TypeId::NEVER)
    }

    /// `Exclude<U, E>`: the members of `U` not assignable to `E`.
    pub fn evaluate_exclude(&mut self, union: TypeId, excluded: TypeId) -> TypeId {
        let interner = self.interner();
        let kept = interner
            .union_members(union)
            .into_iter()
            .filter(|&member| !is_assignable_to(interner, member, excluded))
            .collect();
        interner.union(kept)
    }

    /// Evaluate `UnionToTuple<U>`. [`TypeId::ERROR`] when the union is too
    /// wide to convert within the instantiation depth limit.
    pub fn evaluate_union_to_tuple(&mut self, union: TypeId) -> TypeId {
        if union == TypeId::ERROR {
            return TypeId::ERROR;
        }
        let interner = self.interner();
        let width = interner.union_members(union).len();
        if width > MAX_UNION_TO_TUPLE_MEMBERS {
            trace!(width, "union too wide for tuple conversion");
            self.depth.mark_exceeded();
            return TypeId::ERROR;
        }

        match self.union_to_tuple_elements(union) {
            Some(elements) => {
                debug!(members = elements.len(), "converted union to tuple");
                interner.tuple_of(&elements)
            }
            None => {
                trace!("instantiation depth exceeded in union-to-tuple");
                TypeId::ERROR
            }
        }
    }

    fn union_to_tuple_elements(&mut self, union: TypeId) -> Option<Vec<TypeId>> {
        if union == TypeId::NEVER {
            return Some(Vec::new());
        }
        if !self.depth.enter() {
            return None;
        }

        let last = self.evaluate_last_in_union(union);
        let rest = self.evaluate_exclude(union, last);
        trace!(
            last = last.0,
            rest = rest.0,
            depth = self.depth.depth(),
            "union-to-tuple step"
        );
        let result = self.union_to_tuple_elements(rest).map(|mut elements| {
            elements.push(last);
            elements
        });

        self.depth.leave();
        result
    }
}

#[cfg(test)]
#[path = "../../tests/union_tuple_tests.rs"]
mod tests;
