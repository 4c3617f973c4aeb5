//! Structural type representation.
//!
//! Types are interned: a [`TypeData`] describes the structure, a [`TypeId`] is
//! the handle to the interned structure. Two types are identical iff their
//! `TypeId`s are equal.

use bienum_common::Atom;
use std::hash::{Hash, Hasher};

/// Handle to an interned type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Internal placeholder, never the result of an evaluation.
    pub const NONE: TypeId = TypeId(0);
    /// Result of a failed evaluation (for example a recursion limit hit).
    pub const ERROR: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const UNKNOWN: TypeId = TypeId(3);
    pub const ANY: TypeId = TypeId(4);
    pub const VOID: TypeId = TypeId(5);
    pub const UNDEFINED: TypeId = TypeId(6);
    pub const NULL: TypeId = TypeId(7);
    /// `true | false`.
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const NUMBER: TypeId = TypeId(9);
    pub const STRING: TypeId = TypeId(10);
    pub const BIGINT: TypeId = TypeId(11);
    pub const SYMBOL: TypeId = TypeId(12);
    pub const OBJECT: TypeId = TypeId(13);
    pub const BOOLEAN_TRUE: TypeId = TypeId(14);
    pub const BOOLEAN_FALSE: TypeId = TypeId(15);

    /// First id handed out by the interner.
    pub const FIRST_USER: u32 = 100;

    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == Self::ERROR
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Bigint,
    Symbol,
    Object,
}

impl IntrinsicKind {
    pub fn to_type_id(self) -> TypeId {
        match self {
            IntrinsicKind::Any => TypeId::ANY,
            IntrinsicKind::Unknown => TypeId::UNKNOWN,
            IntrinsicKind::Never => TypeId::NEVER,
            IntrinsicKind::Void => TypeId::VOID,
            IntrinsicKind::Undefined => TypeId::UNDEFINED,
            IntrinsicKind::Null => TypeId::NULL,
            IntrinsicKind::Boolean => TypeId::BOOLEAN,
            IntrinsicKind::Number => TypeId::NUMBER,
            IntrinsicKind::String => TypeId::STRING,
            IntrinsicKind::Bigint => TypeId::BIGINT,
            IntrinsicKind::Symbol => TypeId::SYMBOL,
            IntrinsicKind::Object => TypeId::OBJECT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Any => "any",
            IntrinsicKind::Unknown => "unknown",
            IntrinsicKind::Never => "never",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Undefined => "undefined",
            IntrinsicKind::Null => "null",
            IntrinsicKind::Boolean => "boolean",
            IntrinsicKind::Number => "number",
            IntrinsicKind::String => "string",
            IntrinsicKind::Bigint => "bigint",
            IntrinsicKind::Symbol => "symbol",
            IntrinsicKind::Object => "object",
        }
    }
}

/// `f64` with total equality, so number literals can be interned.
///
/// `-0` is folded into `0` and every NaN is the same value.
#[derive(Clone, Copy, Debug)]
pub struct OrderedFloat(pub f64);

impl OrderedFloat {
    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for OrderedFloat {}

impl Hash for OrderedFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(Atom),
    Number(OrderedFloat),
    Boolean(bool),
    /// Decimal digits, sign included.
    BigInt(Atom),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TupleListId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShapeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TupleElement {
    pub type_id: TypeId,
}

/// How a property name was written.
///
/// `{1234: x}` has a numeric name: `keyof` sees the number literal `1234`,
/// not the string `"1234"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyNameKind {
    String,
    Numeric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub name_kind: PropertyNameKind,
    pub type_id: TypeId,
}

impl PropertyInfo {
    pub fn new(name: Atom, type_id: TypeId) -> Self {
        PropertyInfo {
            name,
            name_kind: PropertyNameKind::String,
            type_id,
        }
    }

    pub fn numeric(name: Atom, type_id: TypeId) -> Self {
        PropertyInfo {
            name,
            name_kind: PropertyNameKind::Numeric,
            type_id,
        }
    }
}

/// Properties of an object type, sorted by name atom.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ObjectShape {
    pub properties: Vec<PropertyInfo>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    Union(TypeListId),
    Intersection(TypeListId),
    Array(TypeId),
    Tuple(TupleListId),
    /// `readonly T` for arrays and tuples.
    ReadonlyType(TypeId),
    Object(ObjectShapeId),
    /// `(arg: any) => arg is T`.
    TypePredicate(TypeId),
    /// A named built-in such as `RegExp`.
    Reference(Atom),
    Error,
}
