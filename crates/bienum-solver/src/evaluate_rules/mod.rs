//! Evaluation rules, one operator per module.

pub mod flip;
pub mod key_remap;
pub mod keyof;
pub mod template_literal;
pub mod union_tuple;
