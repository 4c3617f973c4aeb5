//! Centralized limits and thresholds.
//!
//! Shared constants for recursion depths and sizes used by the type layer.
//! The runtime constructor has no limits; it accepts any definition.

/// Maximum recursion depth for type-level evaluation.
///
/// Union-to-tuple conversion recurses once per union member and is not
/// tail-recursive, so it hits this limit for very wide unions. When exceeded
/// the evaluation returns `TypeId::ERROR`, the equivalent of
/// *"Type instantiation is excessively deep and possibly infinite."*
///
/// ```typescript
/// type T = UnionToTuple<0 | 1 | 2 | /* ... 100+ members ... */ 999>;
/// ```
pub const MAX_INSTANTIATION_DEPTH: u32 = 100;

/// Largest union accepted by union-to-tuple conversion.
///
/// One frame of [`MAX_INSTANTIATION_DEPTH`] is spent per member, so the
/// widest convertible union is one smaller than the depth limit.
pub const MAX_UNION_TO_TUPLE_MEMBERS: usize = (MAX_INSTANTIATION_DEPTH as usize) - 1;

/// Maximum number of members produced when a `` `${T}` `` conversion
/// distributes over a union.
pub const TEMPLATE_LITERAL_EXPANSION_LIMIT: usize = 10_000;

/// Object shapes with at least this many properties get a name → index map.
pub const PROPERTY_MAP_THRESHOLD: usize = 24;
