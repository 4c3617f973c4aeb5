//! Type interning.
//!
//! Every type constructed by the type layer goes through the [`TypeInterner`],
//! which deduplicates structures so that type identity is `TypeId` equality.
//! Unions and intersections are normalized on the way in:
//!
//! - nested unions are flattened, members sorted by id and deduplicated;
//! - `never` disappears from unions, `any`/`unknown` absorb them;
//! - literals are absorbed by their primitive (`"a" | string` is `string`);
//! - `true | false` collapses to `boolean`;
//! - object members of an intersection are merged into one object.
//!
//! The sort-by-id rule is what gives union members their canonical order,
//! and therefore the order union-to-tuple conversion produces.

use std::sync::{Arc, RwLock};

use bienum_common::limits::PROPERTY_MAP_THRESHOLD;
use bienum_common::{Atom, ShardedInterner, is_array_index};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::types::{
    IntrinsicKind, LiteralValue, ObjectShape, ObjectShapeId, OrderedFloat, PropertyInfo,
    TupleElement, TupleListId, TypeData, TypeId, TypeListId,
};

/// Deduplicating store for slices (union members, tuple elements).
struct SliceInterner<T> {
    state: RwLock<SliceInternerState<T>>,
}

struct SliceInternerState<T> {
    items: Vec<Arc<[T]>>,
    map: FxHashMap<Arc<[T]>, u32>,
}

impl<T> SliceInterner<T>
where
    T: Eq + std::hash::Hash + Clone,
{
    fn new() -> Self {
        SliceInterner {
            state: RwLock::new(SliceInternerState {
                items: Vec::new(),
                map: FxHashMap::default(),
            }),
        }
    }

    fn intern(&self, items: &[T]) -> u32 {
        {
            let state = self.state.read().expect("slice interner lock poisoned");
            if let Some(&id) = state.map.get(items) {
                return id;
            }
        }

        let mut state = self.state.write().expect("slice interner lock poisoned");
        if let Some(&id) = state.map.get(items) {
            return id;
        }
        let id = state.items.len() as u32;
        let arc: Arc<[T]> = Arc::from(items.to_vec());
        state.items.push(Arc::clone(&arc));
        state.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Arc<[T]> {
        let state = self.state.read().expect("slice interner lock poisoned");
        state
            .items
            .get(id as usize)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }
}

/// Deduplicating store for object shapes.
struct ShapeInterner {
    state: RwLock<ShapeInternerState>,
}

struct ShapeInternerState {
    items: Vec<Arc<ObjectShape>>,
    map: FxHashMap<Arc<ObjectShape>, u32>,
    /// Name → position maps for shapes with many properties.
    property_maps: FxHashMap<u32, Arc<FxHashMap<Atom, usize>>>,
}

impl ShapeInterner {
    fn new() -> Self {
        ShapeInterner {
            state: RwLock::new(ShapeInternerState {
                items: Vec::new(),
                map: FxHashMap::default(),
                property_maps: FxHashMap::default(),
            }),
        }
    }

    fn intern(&self, shape: ObjectShape) -> u32 {
        {
            let state = self.state.read().expect("shape interner lock poisoned");
            if let Some(&id) = state.map.get(&shape) {
                return id;
            }
        }

        let mut state = self.state.write().expect("shape interner lock poisoned");
        if let Some(&id) = state.map.get(&shape) {
            return id;
        }
        let id = state.items.len() as u32;
        if shape.properties.len() >= PROPERTY_MAP_THRESHOLD {
            let index = shape
                .properties
                .iter()
                .enumerate()
                .map(|(position, prop)| (prop.name, position))
                .collect();
            state.property_maps.insert(id, Arc::new(index));
        }
        let arc = Arc::new(shape);
        state.items.push(Arc::clone(&arc));
        state.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Arc<ObjectShape> {
        let state = self.state.read().expect("shape interner lock poisoned");
        state.items.get(id as usize).cloned().unwrap_or_default()
    }

    fn property_map(&self, id: u32) -> Option<Arc<FxHashMap<Atom, usize>>> {
        let state = self.state.read().expect("shape interner lock poisoned");
        state.property_maps.get(&id).cloned()
    }
}

struct TypeStore {
    keys: Vec<TypeData>,
    map: FxHashMap<TypeData, TypeId>,
}

/// The shared type store.
///
/// `TypeInterner` is `Send + Sync`; every table sits behind its own `RwLock`.
pub struct TypeInterner {
    strings: ShardedInterner,
    types: RwLock<TypeStore>,
    type_lists: SliceInterner<TypeId>,
    tuple_lists: SliceInterner<TupleElement>,
    shapes: ShapeInterner,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let strings = ShardedInterner::new();
        strings.intern_common();
        TypeInterner {
            strings,
            types: RwLock::new(TypeStore {
                keys: Vec::new(),
                map: FxHashMap::default(),
            }),
            type_lists: SliceInterner::new(),
            tuple_lists: SliceInterner::new(),
            shapes: ShapeInterner::new(),
        }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    pub fn intern_string(&self, s: &str) -> Atom {
        self.strings.intern(s)
    }

    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.strings.resolve(atom)
    }

    // =========================================================================
    // Core interning
    // =========================================================================

    /// Number of interned (non-intrinsic) types.
    pub fn len(&self) -> usize {
        self.types.read().expect("type store lock poisoned").keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The structure behind `id`. `None` for [`TypeId::NONE`] and unknown ids.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        if id.is_intrinsic() {
            return Self::intrinsic_data(id);
        }
        let index = (id.0 - TypeId::FIRST_USER) as usize;
        let store = self.types.read().expect("type store lock poisoned");
        store.keys.get(index).copied()
    }

    fn intrinsic_data(id: TypeId) -> Option<TypeData> {
        let kind = match id {
            TypeId::ERROR => return Some(TypeData::Error),
            TypeId::BOOLEAN_TRUE => return Some(TypeData::Literal(LiteralValue::Boolean(true))),
            TypeId::BOOLEAN_FALSE => return Some(TypeData::Literal(LiteralValue::Boolean(false))),
            TypeId::NEVER => IntrinsicKind::Never,
            TypeId::UNKNOWN => IntrinsicKind::Unknown,
            TypeId::ANY => IntrinsicKind::Any,
            TypeId::VOID => IntrinsicKind::Void,
            TypeId::UNDEFINED => IntrinsicKind::Undefined,
            TypeId::NULL => IntrinsicKind::Null,
            TypeId::BOOLEAN => IntrinsicKind::Boolean,
            TypeId::NUMBER => IntrinsicKind::Number,
            TypeId::STRING => IntrinsicKind::String,
            TypeId::BIGINT => IntrinsicKind::Bigint,
            TypeId::SYMBOL => IntrinsicKind::Symbol,
            TypeId::OBJECT => IntrinsicKind::Object,
            _ => return None,
        };
        Some(TypeData::Intrinsic(kind))
    }

    /// Intern a structure without normalizing it.
    ///
    /// Use the typed constructors (`union`, `object`, ...) instead; this is
    /// the bottom layer they share.
    pub fn intern(&self, data: TypeData) -> TypeId {
        match data {
            TypeData::Intrinsic(kind) => return kind.to_type_id(),
            TypeData::Literal(LiteralValue::Boolean(value)) => return Self::boolean_id(value),
            TypeData::Error => return TypeId::ERROR,
            _ => {}
        }

        {
            let store = self.types.read().expect("type store lock poisoned");
            if let Some(&id) = store.map.get(&data) {
                return id;
            }
        }

        let mut store = self.types.write().expect("type store lock poisoned");
        if let Some(&id) = store.map.get(&data) {
            return id;
        }
        let id = TypeId(TypeId::FIRST_USER + store.keys.len() as u32);
        store.keys.push(data);
        store.map.insert(data, id);
        id
    }

    fn boolean_id(value: bool) -> TypeId {
        if value {
            TypeId::BOOLEAN_TRUE
        } else {
            TypeId::BOOLEAN_FALSE
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    pub fn literal_string(&self, value: &str) -> TypeId {
        let atom = self.intern_string(value);
        self.literal_string_atom(atom)
    }

    pub fn literal_string_atom(&self, atom: Atom) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::String(atom)))
    }

    pub fn literal_number(&self, value: f64) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Number(OrderedFloat(value))))
    }

    pub fn literal_boolean(&self, value: bool) -> TypeId {
        Self::boolean_id(value)
    }

    /// A bigint literal from its decimal digits (`"-12"`).
    pub fn literal_bigint(&self, digits: &str) -> TypeId {
        let atom = self.intern_string(digits);
        self.intern(TypeData::Literal(LiteralValue::BigInt(atom)))
    }

    // =========================================================================
    // Composite constructors
    // =========================================================================

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn tuple(&self, elements: Vec<TupleElement>) -> TypeId {
        let id = self.tuple_lists.intern(&elements);
        self.intern(TypeData::Tuple(TupleListId(id)))
    }

    /// Shorthand for a tuple of plain (required, non-rest) elements.
    pub fn tuple_of(&self, types: &[TypeId]) -> TypeId {
        self.tuple(
            types
                .iter()
                .map(|&type_id| TupleElement { type_id })
                .collect(),
        )
    }

    /// `readonly T`. Only arrays and tuples can be readonly; anything else is
    /// returned unchanged.
    pub fn readonly(&self, inner: TypeId) -> TypeId {
        match self.lookup(inner) {
            Some(TypeData::Array(_) | TypeData::Tuple(_)) => {
                self.intern(TypeData::ReadonlyType(inner))
            }
            _ => inner,
        }
    }

    /// An object type. Duplicate names keep the last property.
    ///
    /// Properties are stored in a canonical order (array-index names
    /// ascending, then all other names by code point) so that two objects
    /// with the same properties are the same type.
    pub fn object(&self, properties: Vec<PropertyInfo>) -> TypeId {
        let mut by_name: FxHashMap<Atom, usize> = FxHashMap::default();
        let mut deduped: Vec<PropertyInfo> = Vec::with_capacity(properties.len());
        for prop in properties {
            match by_name.get(&prop.name) {
                Some(&position) => deduped[position] = prop,
                None => {
                    by_name.insert(prop.name, deduped.len());
                    deduped.push(prop);
                }
            }
        }

        let mut keyed: Vec<(Option<u32>, Arc<str>, PropertyInfo)> = deduped
            .into_iter()
            .map(|prop| {
                let name = self.resolve_atom(prop.name);
                (is_array_index(&name), name, prop)
            })
            .collect();
        keyed.sort_by(|a, b| match (a.0, b.0) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.1.cmp(&b.1),
        });

        let shape = ObjectShape {
            properties: keyed.into_iter().map(|(_, _, prop)| prop).collect(),
        };
        let id = self.shapes.intern(shape);
        self.intern(TypeData::Object(ObjectShapeId(id)))
    }

    /// `(arg: any) => arg is T`.
    pub fn type_predicate(&self, guarded: TypeId) -> TypeId {
        self.intern(TypeData::TypePredicate(guarded))
    }

    /// A named built-in object type.
    pub fn reference(&self, name: &str) -> TypeId {
        let atom = self.intern_string(name);
        self.intern(TypeData::Reference(atom))
    }

    // =========================================================================
    // Unions
    // =========================================================================

    pub fn union2(&self, left: TypeId, right: TypeId) -> TypeId {
        self.union(vec![left, right])
    }

    /// A normalized union.
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: SmallVec<[TypeId; 8]> = SmallVec::new();
        for member in members {
            self.flatten_union_member(member, &mut flat);
        }

        if flat.contains(&TypeId::ERROR) {
            return TypeId::ERROR;
        }
        if flat.contains(&TypeId::ANY) {
            return TypeId::ANY;
        }
        if flat.contains(&TypeId::UNKNOWN) {
            return TypeId::UNKNOWN;
        }
        flat.retain(|member| *member != TypeId::NEVER);

        self.absorb_literals(&mut flat);

        flat.sort_unstable();
        flat.dedup();

        if flat.contains(&TypeId::BOOLEAN_TRUE) && flat.contains(&TypeId::BOOLEAN_FALSE) {
            flat.retain(|member| *member != TypeId::BOOLEAN_TRUE && *member != TypeId::BOOLEAN_FALSE);
            flat.push(TypeId::BOOLEAN);
            flat.sort_unstable();
        }

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                trace!(members = flat.len(), "interning union");
                let list = self.type_lists.intern(&flat);
                self.intern(TypeData::Union(TypeListId(list)))
            }
        }
    }

    fn flatten_union_member(&self, member: TypeId, out: &mut SmallVec<[TypeId; 8]>) {
        match self.lookup(member) {
            Some(TypeData::Union(list)) => out.extend(self.type_list(list).iter().copied()),
            _ if member == TypeId::BOOLEAN => {
                out.push(TypeId::BOOLEAN_TRUE);
                out.push(TypeId::BOOLEAN_FALSE);
            }
            _ => out.push(member),
        }
    }

    /// Drop literals whose primitive is also a member.
    fn absorb_literals(&self, members: &mut SmallVec<[TypeId; 8]>) {
        let has_string = members.contains(&TypeId::STRING);
        let has_number = members.contains(&TypeId::NUMBER);
        let has_bigint = members.contains(&TypeId::BIGINT);
        if !(has_string || has_number || has_bigint) {
            return;
        }
        members.retain(|member| match self.lookup(*member) {
            Some(TypeData::Literal(LiteralValue::String(_))) => !has_string,
            Some(TypeData::Literal(LiteralValue::Number(_))) => !has_number,
            Some(TypeData::Literal(LiteralValue::BigInt(_))) => !has_bigint,
            _ => true,
        });
    }

    // =========================================================================
    // Intersections
    // =========================================================================

    pub fn intersection2(&self, left: TypeId, right: TypeId) -> TypeId {
        self.intersection(vec![left, right])
    }

    /// A normalized intersection.
    ///
    /// All object members are merged into a single object; a property present
    /// in several of them gets the intersection of its types.
    pub fn intersection(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: SmallVec<[TypeId; 8]> = SmallVec::new();
        for member in members {
            match self.lookup(member) {
                Some(TypeData::Intersection(list)) => {
                    flat.extend(self.type_list(list).iter().copied())
                }
                _ => flat.push(member),
            }
        }

        if flat.contains(&TypeId::ERROR) {
            return TypeId::ERROR;
        }
        if flat.contains(&TypeId::NEVER) {
            return TypeId::NEVER;
        }
        if flat.contains(&TypeId::ANY) {
            return TypeId::ANY;
        }
        flat.retain(|member| *member != TypeId::UNKNOWN);
        flat.sort_unstable();
        flat.dedup();

        if self.has_disjoint_primitives(&flat) {
            return TypeId::NEVER;
        }
        self.drop_widened_primitives(&mut flat);

        let mut objects: Vec<TypeId> = Vec::new();
        let mut rest: SmallVec<[TypeId; 8]> = SmallVec::new();
        for member in flat {
            match self.lookup(member) {
                Some(TypeData::Object(_)) => objects.push(member),
                _ => rest.push(member),
            }
        }
        if objects.len() > 1 {
            rest.push(self.merge_objects(&objects));
        } else {
            rest.extend(objects);
        }
        rest.sort_unstable();
        rest.dedup();

        match rest.len() {
            0 => TypeId::UNKNOWN,
            1 => rest[0],
            _ => {
                let list = self.type_list_id(&rest);
                self.intern(TypeData::Intersection(list))
            }
        }
    }

    /// Two distinct literals, or a literal and an unrelated primitive.
    fn has_disjoint_primitives(&self, members: &[TypeId]) -> bool {
        let primitive_of = |member: TypeId| -> Option<(TypeId, bool)> {
            match self.lookup(member)? {
                TypeData::Literal(LiteralValue::String(_)) => Some((TypeId::STRING, true)),
                TypeData::Literal(LiteralValue::Number(_)) => Some((TypeId::NUMBER, true)),
                TypeData::Literal(LiteralValue::Boolean(_)) => Some((TypeId::BOOLEAN, true)),
                TypeData::Literal(LiteralValue::BigInt(_)) => Some((TypeId::BIGINT, true)),
                TypeData::Intrinsic(
                    IntrinsicKind::String
                    | IntrinsicKind::Number
                    | IntrinsicKind::Boolean
                    | IntrinsicKind::Bigint
                    | IntrinsicKind::Symbol
                    | IntrinsicKind::Null
                    | IntrinsicKind::Undefined,
                ) => Some((member, false)),
                _ => None,
            }
        };

        let mut seen_literal: Option<TypeId> = None;
        let mut seen_primitive: Option<TypeId> = None;
        for &member in members {
            let Some((primitive, is_literal)) = primitive_of(member) else {
                continue;
            };
            if seen_primitive.is_some_and(|previous| previous != primitive) {
                return true;
            }
            seen_primitive = Some(primitive);
            if is_literal {
                if seen_literal.is_some_and(|previous| previous != member) {
                    return true;
                }
                seen_literal = Some(member);
            }
        }
        false
    }

    /// `"a" & string` is `"a"`.
    fn drop_widened_primitives(&self, members: &mut SmallVec<[TypeId; 8]>) {
        let has_literal = members
            .iter()
            .any(|member| matches!(self.lookup(*member), Some(TypeData::Literal(_))));
        if has_literal {
            members.retain(|member| {
                !matches!(
                    *member,
                    TypeId::STRING | TypeId::NUMBER | TypeId::BOOLEAN | TypeId::BIGINT
                )
            });
        }
    }

    fn merge_objects(&self, objects: &[TypeId]) -> TypeId {
        let mut merged: Vec<PropertyInfo> = Vec::new();
        let mut positions: FxHashMap<Atom, usize> = FxHashMap::default();
        for &object in objects {
            for prop in self.object_properties(object).iter() {
                match positions.get(&prop.name) {
                    Some(&position) => {
                        let existing = merged[position];
                        merged[position] = PropertyInfo {
                            type_id: self.intersection2(existing.type_id, prop.type_id),
                            ..existing
                        };
                    }
                    None => {
                        positions.insert(prop.name, merged.len());
                        merged.push(*prop);
                    }
                }
            }
        }
        self.object(merged)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    fn type_list_id(&self, members: &[TypeId]) -> TypeListId {
        TypeListId(self.type_lists.intern(members))
    }

    pub fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        self.type_lists.get(id.0)
    }

    pub fn tuple_list(&self, id: TupleListId) -> Arc<[TupleElement]> {
        self.tuple_lists.get(id.0)
    }

    pub fn object_shape(&self, id: ObjectShapeId) -> Arc<ObjectShape> {
        self.shapes.get(id.0)
    }

    /// Properties of an object type; empty for anything else.
    pub fn object_properties(&self, type_id: TypeId) -> Vec<PropertyInfo> {
        match self.lookup(type_id) {
            Some(TypeData::Object(shape)) => self.object_shape(shape).properties.clone(),
            _ => Vec::new(),
        }
    }

    /// Look a property up by name on an object shape.
    pub fn find_property(&self, shape_id: ObjectShapeId, name: Atom) -> Option<PropertyInfo> {
        let shape = self.object_shape(shape_id);
        if let Some(index) = self.shapes.property_map(shape_id.0) {
            return index
                .get(&name)
                .and_then(|&position| shape.properties.get(position).copied());
        }
        shape.properties.iter().find(|prop| prop.name == name).copied()
    }

    /// Members of a union in canonical order.
    ///
    /// `never` has no members, `boolean` has `true` and `false`, and any other
    /// non-union type is its own single member.
    pub fn union_members(&self, type_id: TypeId) -> Vec<TypeId> {
        if type_id == TypeId::NEVER {
            return Vec::new();
        }
        if type_id == TypeId::BOOLEAN {
            return vec![TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN_FALSE];
        }
        match self.lookup(type_id) {
            Some(TypeData::Union(list)) => {
                let mut members = Vec::new();
                for &member in self.type_list(list).iter() {
                    if member == TypeId::BOOLEAN {
                        members.extend([TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN_FALSE]);
                    } else {
                        members.push(member);
                    }
                }
                members
            }
            _ => vec![type_id],
        }
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
