//! `` `${T}` `` over classic primitives.
//!
//! Only string, number, boolean, null and undefined (and their literals) can
//! be interpolated; every other member maps to `never` and so drops out of
//! the result. Unions distribute.

use bienum_common::js_number_to_string;
use bienum_common::limits::TEMPLATE_LITERAL_EXPANSION_LIMIT;
use tracing::trace;

use crate::evaluate::TypeEvaluator;
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId};

impl<'a> TypeEvaluator<'a> {
    /// Evaluate `` `${T}` ``.
    ///
    /// `"a"` stays `"a"`, `1` becomes `"1"`, `boolean` becomes
    /// `"true" | "false"`, `null`/`undefined` become `"null"`/`"undefined"`.
    /// Non-literal `string`, `number` and `any` widen to `string`.
    pub fn evaluate_to_string(&mut self, type_id: TypeId) -> TypeId {
        let interner = self.interner();
        let members = interner.union_members(type_id);
        if members.len() > TEMPLATE_LITERAL_EXPANSION_LIMIT {
            trace!(
                members = members.len(),
                "template literal expansion limit exceeded, widening to string"
            );
            return TypeId::STRING;
        }

        let converted: Vec<TypeId> = members
            .into_iter()
            .map(|member| self.member_to_string(member))
            .collect();
        interner.union(converted)
    }

    fn member_to_string(&self, member: TypeId) -> TypeId {
        let interner = self.interner();
        match interner.lookup(member) {
            Some(TypeData::Literal(LiteralValue::String(_))) => member,
            Some(TypeData::Literal(LiteralValue::Number(value))) => {
                interner.literal_string(&js_number_to_string(value.0))
            }
            Some(TypeData::Literal(LiteralValue::Boolean(value))) => {
                interner.literal_string(if value { "true" } else { "false" })
            }
            Some(TypeData::Intrinsic(kind)) => match kind {
                IntrinsicKind::Null => interner.literal_string("null"),
                IntrinsicKind::Undefined => interner.literal_string("undefined"),
                IntrinsicKind::String | IntrinsicKind::Number | IntrinsicKind::Any => {
                    TypeId::STRING
                }
                _ => TypeId::NEVER,
            },
            Some(TypeData::Error) => TypeId::ERROR,
            _ => TypeId::NEVER,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/template_literal_tests.rs"]
mod tests;
