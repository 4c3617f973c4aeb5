//! Command-line front end: read a JSON definition object, print the bi-enum
//! built from it and, on request, its inferred types and membership checks.

pub mod args;
pub mod driver;
pub mod reporter;
