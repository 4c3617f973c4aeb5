//! Bidirectional enums at runtime.
//!
//! Given a definition such as `{Up: 1, Down: 2}`, [`BiEnum::new`] builds an
//! instance that maps labels to values and values back to labels:
//!
//! ```
//! use bienum_runtime::{BiEnum, Definition, Value};
//!
//! let direction = BiEnum::new(&Definition::new().entry("Up", 1).entry("Down", 2));
//! assert_eq!(direction["Up"], Value::Number(1.0));
//! assert_eq!(direction["1"], Value::from("Up"));
//! assert_eq!(direction.all_labels(), ["Up", "Down"]);
//! assert!(direction.is_value(2));
//! ```
//!
//! Only classic primitives (string, number, boolean, null, undefined) get a
//! reverse entry. Construction never fails and never validates; see
//! [`bi_enum!`] for the statically checked form.

mod bienum;
mod definition;
mod macros;
mod property_key;
mod prototype;
mod value;

pub use bienum::BiEnum;
pub use definition::{Definition, DefinitionError};
pub use macros::BiEnumType;
pub use property_key::{PropertyKey, PropertyMap};
pub use prototype::{HELPER_NAMES, Prototype};
pub use value::{ClassicPrimitive, RegExp, Value, is_classic_primitive};

#[cfg(test)]
#[path = "../tests/scenario_tests.rs"]
mod scenario_tests;
