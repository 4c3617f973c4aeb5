//! Assignability.
//!
//! Structural subtyping over the types the bi-enum layer produces:
//! intrinsics, literals, unions, intersections, arrays, tuples, objects,
//! type guards and named references. `any`, `unknown` and `error` are
//! permissive so that one failed evaluation does not cascade.
//!
//! Cycles are treated coinductively: a pair already under comparison is
//! assumed to hold.

use tracing::trace;

use crate::diagnostics::SubtypeFailureReason;
use crate::intern::TypeInterner;
use crate::recursion::{RecursionGuard, RecursionResult};
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId};

pub struct SubtypeChecker<'a> {
    interner: &'a TypeInterner,
    guard: RecursionGuard<(TypeId, TypeId)>,
}

impl<'a> SubtypeChecker<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        SubtypeChecker {
            interner,
            guard: RecursionGuard::default(),
        }
    }

    /// Whether a value of type `source` can be used where `target` is
    /// expected.
    pub fn is_subtype_of(&mut self, source: TypeId, target: TypeId) -> bool {
        if source == target {
            return true;
        }
        match self.guard.enter((source, target)) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => return true,
            RecursionResult::DepthExceeded => {
                trace!(source = source.0, target = target.0, "subtype depth exceeded");
                return false;
            }
        }
        let result = self.check(source, target);
        self.guard.leave((source, target));
        result
    }

    fn check(&mut self, source: TypeId, target: TypeId) -> bool {
        let interner = self.interner;

        if target == TypeId::ANY || target == TypeId::UNKNOWN {
            return true;
        }
        if source == TypeId::ERROR || target == TypeId::ERROR || source == TypeId::NEVER {
            return true;
        }
        if source == TypeId::ANY {
            return target != TypeId::NEVER;
        }
        if target == TypeId::NEVER {
            return false;
        }

        let source_members = interner.union_members(source);
        if source_members.len() > 1 {
            return source_members
                .into_iter()
                .all(|member| self.is_subtype_of(member, target));
        }

        let target_members = interner.union_members(target);
        if target_members.len() > 1 {
            return target_members
                .into_iter()
                .any(|member| self.is_subtype_of(source, member));
        }

        if let Some(TypeData::Intersection(list)) = interner.lookup(target) {
            let members = interner.type_list(list);
            return members.iter().all(|&member| self.is_subtype_of(source, member));
        }
        if let Some(TypeData::Intersection(list)) = interner.lookup(source) {
            let members = interner.type_list(list);
            return members.iter().any(|&member| self.is_subtype_of(member, target));
        }

        let (Some(source_data), Some(target_data)) = (interner.lookup(source), interner.lookup(target))
        else {
            return false;
        };

        match (source_data, target_data) {
            (_, TypeData::Intrinsic(kind)) => self.check_to_intrinsic(source, source_data, kind),
            (TypeData::Array(s), TypeData::Array(t)) => self.is_subtype_of(s, t),
            (TypeData::Tuple(list), TypeData::Array(t)) => {
                let elements = interner.tuple_list(list);
                elements.iter().all(|element| self.is_subtype_of(element.type_id, t))
            }
            (TypeData::Tuple(s), TypeData::Tuple(t)) => {
                let source_elements = interner.tuple_list(s);
                let target_elements = interner.tuple_list(t);
                source_elements.len() == target_elements.len()
                    && source_elements
                        .iter()
                        .zip(target_elements.iter())
                        .all(|(s, t)| self.is_subtype_of(s.type_id, t.type_id))
            }
            (TypeData::ReadonlyType(s), TypeData::ReadonlyType(t)) => self.is_subtype_of(s, t),
            (_, TypeData::ReadonlyType(t)) => self.is_subtype_of(source, t),
            (TypeData::Object(_), TypeData::Object(_)) => self.check_object(source, target),
            (_, TypeData::Object(shape)) => {
                interner.object_shape(shape).properties.is_empty() && !is_nullish(source)
            }
            (TypeData::TypePredicate(s), TypeData::TypePredicate(t)) => self.is_subtype_of(s, t),
            _ => false,
        }
    }

    fn check_to_intrinsic(&mut self, source: TypeId, source_data: TypeData, kind: IntrinsicKind) -> bool {
        match kind {
            IntrinsicKind::Void => source == TypeId::UNDEFINED,
            IntrinsicKind::Object => matches!(
                source_data,
                TypeData::Object(_)
                    | TypeData::Array(_)
                    | TypeData::Tuple(_)
                    | TypeData::ReadonlyType(_)
                    | TypeData::TypePredicate(_)
                    | TypeData::Reference(_)
            ),
            IntrinsicKind::String => {
                matches!(source_data, TypeData::Literal(LiteralValue::String(_)))
            }
            IntrinsicKind::Number => {
                matches!(source_data, TypeData::Literal(LiteralValue::Number(_)))
            }
            IntrinsicKind::Boolean => {
                matches!(source_data, TypeData::Literal(LiteralValue::Boolean(_)))
            }
            IntrinsicKind::Bigint => {
                matches!(source_data, TypeData::Literal(LiteralValue::BigInt(_)))
            }
            _ => false,
        }
    }

    fn check_object(&mut self, source: TypeId, target: TypeId) -> bool {
        let interner = self.interner;
        let Some(TypeData::Object(source_shape)) = interner.lookup(source) else {
            return false;
        };
        for target_prop in interner.object_properties(target) {
            match interner.find_property(source_shape, target_prop.name) {
                Some(source_prop) => {
                    if !self.is_subtype_of(source_prop.type_id, target_prop.type_id) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    /// Why `source` is not assignable to `target`, or `None` when it is.
    pub fn explain_failure(&mut self, source: TypeId, target: TypeId) -> Option<SubtypeFailureReason> {
        if self.is_subtype_of(source, target) {
            return None;
        }
        if self.guard.is_exceeded() {
            return Some(SubtypeFailureReason::RecursionLimitExceeded);
        }
        Some(self.failure_reason(source, target))
    }

    fn failure_reason(&mut self, source: TypeId, target: TypeId) -> SubtypeFailureReason {
        let interner = self.interner;

        let target_members = interner.union_members(target);
        if target_members.len() > 1 && interner.union_members(source).len() == 1 {
            return SubtypeFailureReason::NoUnionMemberMatches {
                source_type: source,
                target_union_members: target_members,
            };
        }

        match (interner.lookup(source), interner.lookup(target)) {
            (Some(TypeData::Object(source_shape)), Some(TypeData::Object(_))) => {
                for target_prop in interner.object_properties(target) {
                    let Some(source_prop) = interner.find_property(source_shape, target_prop.name)
                    else {
                        return SubtypeFailureReason::MissingProperty {
                            property_name: target_prop.name,
                            source_type: source,
                            target_type: target,
                        };
                    };
                    if !self.is_subtype_of(source_prop.type_id, target_prop.type_id) {
                        return SubtypeFailureReason::PropertyTypeMismatch {
                            property_name: target_prop.name,
                            source_property_type: source_prop.type_id,
                            target_property_type: target_prop.type_id,
                            nested_reason: self
                                .explain_failure(source_prop.type_id, target_prop.type_id)
                                .map(Box::new),
                        };
                    }
                }
                SubtypeFailureReason::TypeMismatch {
                    source_type: source,
                    target_type: target,
                }
            }
            (Some(TypeData::Tuple(s)), Some(TypeData::Tuple(t))) => {
                let source_elements = interner.tuple_list(s);
                let target_elements = interner.tuple_list(t);
                if source_elements.len() != target_elements.len() {
                    return SubtypeFailureReason::TupleElementMismatch {
                        source_count: source_elements.len(),
                        target_count: target_elements.len(),
                    };
                }
                for (index, (s, t)) in source_elements.iter().zip(target_elements.iter()).enumerate() {
                    if !self.is_subtype_of(s.type_id, t.type_id) {
                        return SubtypeFailureReason::TupleElementTypeMismatch {
                            index,
                            source_element: s.type_id,
                            target_element: t.type_id,
                        };
                    }
                }
                SubtypeFailureReason::TypeMismatch {
                    source_type: source,
                    target_type: target,
                }
            }
            (Some(TypeData::Array(s)), Some(TypeData::Array(t))) => {
                SubtypeFailureReason::ArrayElementMismatch {
                    source_element: s,
                    target_element: t,
                }
            }
            (Some(TypeData::Tuple(list)), Some(TypeData::Array(t))) => {
                let elements = interner.tuple_list(list);
                let source_element = elements
                    .iter()
                    .map(|element| element.type_id)
                    .find(|&element| !self.is_subtype_of(element, t))
                    .unwrap_or(source);
                SubtypeFailureReason::ArrayElementMismatch {
                    source_element,
                    target_element: t,
                }
            }
            (
                Some(TypeData::ReadonlyType(_)),
                Some(TypeData::Array(_) | TypeData::Tuple(_)),
            ) => SubtypeFailureReason::ReadonlyToMutable {
                source_type: source,
                target_type: target,
            },
            (Some(TypeData::Literal(_)), _) => SubtypeFailureReason::LiteralTypeMismatch {
                source_type: source,
                target_type: target,
            },
            (Some(TypeData::Intrinsic(_)), Some(TypeData::Intrinsic(_))) => {
                SubtypeFailureReason::IntrinsicTypeMismatch {
                    source_type: source,
                    target_type: target,
                }
            }
            _ => SubtypeFailureReason::TypeMismatch {
                source_type: source,
                target_type: target,
            },
        }
    }
}

fn is_nullish(type_id: TypeId) -> bool {
    matches!(type_id, TypeId::NULL | TypeId::UNDEFINED | TypeId::VOID)
}

pub fn is_assignable_to(interner: &TypeInterner, source: TypeId, target: TypeId) -> bool {
    SubtypeChecker::new(interner).is_subtype_of(source, target)
}

pub fn explain_assignability_failure(
    interner: &TypeInterner,
    source: TypeId,
    target: TypeId,
) -> Option<SubtypeFailureReason> {
    SubtypeChecker::new(interner).explain_failure(source, target)
}

#[cfg(test)]
#[path = "../tests/relations_tests.rs"]
mod tests;
