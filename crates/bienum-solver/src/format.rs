//! Printing types in TypeScript syntax.

use bienum_common::js_number_to_string;

use crate::intern::TypeInterner;
use crate::types::{LiteralValue, PropertyNameKind, TypeData, TypeId};

/// Formats types for diagnostics and CLI output.
pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
    /// Longest output before an object type is abbreviated to `{ ...; }`.
    max_width: usize,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter {
            interner,
            max_width: usize::MAX,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId) {
        if type_id == TypeId::NONE {
            out.push_str("<none>");
            return;
        }
        let Some(data) = self.interner.lookup(type_id) else {
            out.push_str(&format!("<unknown type {}>", type_id.0));
            return;
        };

        match data {
            TypeData::Intrinsic(kind) => out.push_str(kind.name()),
            TypeData::Error => out.push_str("error"),
            TypeData::Literal(literal) => self.write_literal(out, literal),
            TypeData::Union(list) => {
                let members = self.interner.type_list(list);
                self.write_joined(out, &members, " | ", false);
            }
            TypeData::Intersection(list) => {
                let members = self.interner.type_list(list);
                self.write_joined(out, &members, " & ", true);
            }
            TypeData::Array(element) => {
                self.write_operand(out, element);
                out.push_str("[]");
            }
            TypeData::Tuple(list) => {
                out.push('[');
                for (i, element) in self.interner.tuple_list(list).iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, element.type_id);
                }
                out.push(']');
            }
            TypeData::ReadonlyType(inner) => {
                out.push_str("readonly ");
                self.write_type(out, inner);
            }
            TypeData::Object(shape_id) => {
                let shape = self.interner.object_shape(shape_id);
                if shape.properties.is_empty() {
                    out.push_str("{}");
                    return;
                }
                let start = out.len();
                out.push_str("{ ");
                for prop in &shape.properties {
                    let name = self.interner.resolve_atom(prop.name);
                    match prop.name_kind {
                        PropertyNameKind::Numeric => out.push_str(&name),
                        PropertyNameKind::String if is_identifier(&name) => out.push_str(&name),
                        PropertyNameKind::String => write_quoted(out, &name),
                    }
                    out.push_str(": ");
                    self.write_type(out, prop.type_id);
                    out.push_str("; ");
                }
                out.push('}');
                if out.len() - start > self.max_width {
                    out.truncate(start);
                    out.push_str("{ ...; }");
                }
            }
            TypeData::TypePredicate(guarded) => {
                out.push_str("(arg: any) => arg is ");
                self.write_type(out, guarded);
            }
            TypeData::Reference(name) => out.push_str(&self.interner.resolve_atom(name)),
        }
    }

    fn write_literal(&self, out: &mut String, literal: LiteralValue) {
        match literal {
            LiteralValue::String(atom) => write_quoted(out, &self.interner.resolve_atom(atom)),
            LiteralValue::Number(value) => out.push_str(&js_number_to_string(value.0)),
            LiteralValue::Boolean(value) => out.push_str(if value { "true" } else { "false" }),
            LiteralValue::BigInt(atom) => {
                out.push_str(&self.interner.resolve_atom(atom));
                out.push('n');
            }
        }
    }

    fn write_joined(&self, out: &mut String, members: &[TypeId], separator: &str, wrap: bool) {
        for (i, &member) in members.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            if wrap {
                self.write_operand(out, member);
            } else {
                self.write_type(out, member);
            }
        }
    }

    /// Operand of `[]` or `&`: unions, intersections and functions need
    /// parentheses there.
    fn write_operand(&self, out: &mut String, type_id: TypeId) {
        let needs_parens = matches!(
            self.interner.lookup(type_id),
            Some(TypeData::Union(_) | TypeData::Intersection(_) | TypeData::TypePredicate(_))
        );
        if needs_parens {
            out.push('(');
            self.write_type(out, type_id);
            out.push(')');
        } else {
            self.write_type(out, type_id);
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn write_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
