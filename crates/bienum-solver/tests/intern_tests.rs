use super::*;
use bienum_common::limits::PROPERTY_MAP_THRESHOLD;

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    assert_eq!(
        interner.lookup(TypeId::STRING),
        Some(TypeData::Intrinsic(IntrinsicKind::String))
    );
    assert_eq!(interner.lookup(TypeId::ERROR), Some(TypeData::Error));
    assert_eq!(interner.lookup(TypeId::NONE), None);
    assert!(interner.is_empty());
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.literal_string("hello");
    let id2 = interner.literal_string("hello");
    let id3 = interner.literal_string("world");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_interner_boolean_literals_are_intrinsic() {
    let interner = TypeInterner::new();

    assert_eq!(interner.literal_boolean(true), TypeId::BOOLEAN_TRUE);
    assert_eq!(interner.literal_boolean(false), TypeId::BOOLEAN_FALSE);
    assert_eq!(
        interner.lookup(TypeId::BOOLEAN_TRUE),
        Some(TypeData::Literal(LiteralValue::Boolean(true)))
    );
}

#[test]
fn test_interner_number_literal_zero_and_nan() {
    let interner = TypeInterner::new();

    assert_eq!(interner.literal_number(0.0), interner.literal_number(-0.0));
    assert_eq!(
        interner.literal_number(f64::NAN),
        interner.literal_number(-f64::NAN)
    );
    assert_ne!(interner.literal_number(1.0), interner.literal_number(2.0));
}

#[test]
fn test_interner_bigint_literal() {
    let interner = TypeInterner::new();

    let id = interner.literal_bigint("123");
    let key = interner
        .lookup(id)
        .expect("bigint literal should be interned");

    match key {
        TypeData::Literal(LiteralValue::BigInt(atom)) => {
            assert_eq!(&*interner.resolve_atom(atom), "123");
        }
        _ => panic!("Expected bigint literal, got {:?}", key),
    }
}

#[test]
fn test_interner_union_normalization() {
    let interner = TypeInterner::new();

    assert_eq!(interner.union(vec![TypeId::STRING]), TypeId::STRING);
    assert_eq!(
        interner.union(vec![TypeId::STRING, TypeId::ANY]),
        TypeId::ANY
    );
    assert_eq!(
        interner.union(vec![TypeId::STRING, TypeId::NEVER]),
        TypeId::STRING
    );
    assert_eq!(interner.union(vec![]), TypeId::NEVER);
    assert_eq!(
        interner.union(vec![TypeId::STRING, TypeId::ERROR]),
        TypeId::ERROR
    );
}

#[test]
fn test_interner_union_is_order_independent() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);

    let forward = interner.union(vec![one, two]);
    let backward = interner.union(vec![two, one, one]);

    assert_eq!(forward, backward);
    assert_eq!(interner.union_members(forward), vec![one, two]);
}

#[test]
fn test_interner_union_flattens_nested() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");
    let c = interner.literal_string("c");

    let inner = interner.union2(a, b);
    let outer = interner.union2(inner, c);

    assert_eq!(outer, interner.union(vec![a, b, c]));
    assert_eq!(interner.union_members(outer).len(), 3);
}

#[test]
fn test_interner_union_absorbs_literals() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let one = interner.literal_number(1.0);

    let union = interner.union(vec![a, TypeId::STRING, one]);

    assert_eq!(union, interner.union2(TypeId::STRING, one));
}

#[test]
fn test_interner_true_false_collapse_to_boolean() {
    let interner = TypeInterner::new();

    assert_eq!(
        interner.union2(TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN_FALSE),
        TypeId::BOOLEAN
    );
    assert_eq!(
        interner.union_members(TypeId::BOOLEAN),
        vec![TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN_FALSE]
    );

    let with_null = interner.union(vec![TypeId::BOOLEAN_TRUE, TypeId::NULL, TypeId::BOOLEAN_FALSE]);
    assert_eq!(with_null, interner.union2(TypeId::BOOLEAN, TypeId::NULL));
}

#[test]
fn test_interner_union_members_of_never_is_empty() {
    let interner = TypeInterner::new();

    assert!(interner.union_members(TypeId::NEVER).is_empty());
    assert_eq!(interner.union_members(TypeId::STRING), vec![TypeId::STRING]);
}

#[test]
fn test_interner_object_canonical_order() {
    let interner = TypeInterner::new();
    let up = PropertyInfo::new(interner.intern_string("Up"), TypeId::NUMBER);
    let one = PropertyInfo::new(interner.intern_string("1"), TypeId::STRING);
    let down = PropertyInfo::new(interner.intern_string("Down"), TypeId::NUMBER);

    let a = interner.object(vec![up, one, down]);
    let b = interner.object(vec![down, up, one]);
    assert_eq!(a, b);

    let names: Vec<_> = interner
        .object_properties(a)
        .iter()
        .map(|prop| interner.resolve_atom(prop.name).to_string())
        .collect();
    assert_eq!(names, ["1", "Down", "Up"]);
}

#[test]
fn test_interner_object_duplicate_name_keeps_last() {
    let interner = TypeInterner::new();
    let name = interner.intern_string("x");

    let object = interner.object(vec![
        PropertyInfo::new(name, TypeId::NUMBER),
        PropertyInfo::new(name, TypeId::STRING),
    ]);

    let props = interner.object_properties(object);
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].type_id, TypeId::STRING);
}

#[test]
fn test_interner_find_property_large_shape() {
    let interner = TypeInterner::new();
    let props: Vec<_> = (0..PROPERTY_MAP_THRESHOLD + 4)
        .map(|i| PropertyInfo::new(interner.intern_string(&format!("p{i}")), TypeId::NUMBER))
        .collect();
    let object = interner.object(props);

    let Some(TypeData::Object(shape)) = interner.lookup(object) else {
        panic!("expected object");
    };
    let found = interner.find_property(shape, interner.intern_string("p7"));
    assert_eq!(found.map(|prop| prop.type_id), Some(TypeId::NUMBER));
    assert!(
        interner
            .find_property(shape, interner.intern_string("missing"))
            .is_none()
    );
}

#[test]
fn test_interner_intersection_merges_objects() {
    let interner = TypeInterner::new();
    let a = interner.object(vec![PropertyInfo::new(
        interner.intern_string("a"),
        TypeId::NUMBER,
    )]);
    let b = interner.object(vec![PropertyInfo::new(
        interner.intern_string("b"),
        TypeId::STRING,
    )]);

    let merged = interner.intersection2(a, b);
    let expected = interner.object(vec![
        PropertyInfo::new(interner.intern_string("a"), TypeId::NUMBER),
        PropertyInfo::new(interner.intern_string("b"), TypeId::STRING),
    ]);

    assert_eq!(merged, expected);
}

#[test]
fn test_interner_intersection_conflicting_property_is_never() {
    let interner = TypeInterner::new();
    let name = interner.intern_string("1");
    let a = interner.object(vec![PropertyInfo::new(name, interner.literal_number(1.0))]);
    let b = interner.object(vec![PropertyInfo::new(name, interner.literal_string("Up"))]);

    let merged = interner.intersection2(a, b);
    let props = interner.object_properties(merged);

    assert_eq!(props.len(), 1);
    assert_eq!(props[0].type_id, TypeId::NEVER);
}

#[test]
fn test_interner_intersection_of_literals() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");

    assert_eq!(interner.intersection2(a, b), TypeId::NEVER);
    assert_eq!(interner.intersection2(a, TypeId::STRING), a);
    assert_eq!(interner.intersection2(a, TypeId::NUMBER), TypeId::NEVER);
    assert_eq!(interner.intersection2(a, TypeId::UNKNOWN), a);
    assert_eq!(interner.intersection(vec![]), TypeId::UNKNOWN);
}

#[test]
fn test_interner_readonly_only_wraps_arrays_and_tuples() {
    let interner = TypeInterner::new();
    let tuple = interner.tuple_of(&[TypeId::NUMBER]);

    assert_ne!(interner.readonly(tuple), tuple);
    assert_eq!(interner.readonly(TypeId::STRING), TypeId::STRING);
}

#[test]
fn test_interner_is_shareable_across_threads() {
    let interner = std::sync::Arc::new(TypeInterner::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = std::sync::Arc::clone(&interner);
            std::thread::spawn(move || interner.literal_string("shared"))
        })
        .collect();

    let ids: Vec<TypeId> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
}
