//! Statically typed bi-enums.
//!
//! [`bi_enum!`](crate::bi_enum) turns a definition written in source into a
//! Rust enum whose variants are the labels. The enum type is the precise
//! label union; `from_value` and `from_label` are the checked membership
//! tests that narrow an arbitrary value or string to it.

use crate::bienum::BiEnum;
use crate::definition::Definition;
use crate::value::Value as RuntimeValue;

/// Implemented by enums generated with [`bi_enum!`](crate::bi_enum).
pub trait BiEnumType: Sized + Copy + PartialEq + 'static {
    /// The value type shared by every member.
    type Value: Copy + PartialEq + Into<RuntimeValue> + 'static;

    /// Every member, in declaration order.
    const ALL: &'static [Self];
    const ALL_LABELS: &'static [&'static str];
    const ALL_VALUES: &'static [Self::Value];

    fn label(self) -> &'static str;

    fn value(self) -> Self::Value;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.label() == label)
    }

    /// The first member whose value equals `value`.
    fn from_value(value: Self::Value) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.value() == value)
    }

    fn is_label(label: &str) -> bool {
        Self::from_label(label).is_some()
    }

    fn is_value(value: Self::Value) -> bool {
        Self::from_value(value).is_some()
    }

    fn to_definition() -> Definition {
        Self::ALL
            .iter()
            .map(|member| (member.label(), member.value()))
            .collect::<Definition>()
    }

    /// The dynamic instance for this enum.
    fn to_bi_enum() -> BiEnum {
        BiEnum::new(&Self::to_definition())
    }
}

/// Declare a statically typed bi-enum.
///
/// ```
/// use bienum_runtime::{BiEnumType, bi_enum};
///
/// bi_enum! {
///     pub enum Direction: i32 {
///         Up = 1,
///         Down = 2,
///     }
/// }
///
/// assert_eq!(Direction::Up.value(), 1);
/// assert_eq!(Direction::from_value(2), Some(Direction::Down));
/// assert_eq!(Direction::from_value(3), None);
/// assert_eq!(Direction::ALL_LABELS, ["Up", "Down"]);
/// ```
#[macro_export]
macro_rules! bi_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $value_ty:ty {
            $(
                $(#[$variant_meta:meta])*
                $label:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $label,
            )+
        }

        impl $crate::BiEnumType for $name {
            type Value = $value_ty;

            const ALL: &'static [Self] = &[$(Self::$label),+];
            const ALL_LABELS: &'static [&'static str] = &[$(stringify!($label)),+];
            const ALL_VALUES: &'static [$value_ty] = &[$($value),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$label => stringify!($label),)+
                }
            }

            fn value(self) -> $value_ty {
                match self {
                    $(Self::$label => $value,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::BiEnumType::label(*self))
            }
        }
    };
}

#[cfg(test)]
#[path = "../tests/macros_tests.rs"]
mod tests;
