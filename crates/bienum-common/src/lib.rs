//! Common types and utilities for the bienum crates.
//!
//! This crate provides foundational pieces used by both the runtime
//! constructor and the type layer:
//! - String interning (`Atom`, `ShardedInterner`)
//! - ECMAScript number-to-string conversion (`js_number`)
//! - Recursion limits and thresholds (`limits`)

// String interning for property names and string literals
pub mod interner;
pub use interner::{Atom, ShardedInterner};

// `Number.prototype.toString()` and canonical property key checks
pub mod js_number;
pub use js_number::{is_array_index, is_numeric_literal_name, js_number_to_string};

// Centralized limits and thresholds
pub mod limits;
