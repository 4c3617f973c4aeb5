use crate::evaluate::{TypeEvaluator, keyof, value_of};
use crate::intern::TypeInterner;
use crate::types::{PropertyInfo, TypeId};

fn direction(interner: &TypeInterner) -> TypeId {
    interner.object(vec![
        PropertyInfo::new(interner.intern_string("Up"), interner.literal_number(1.0)),
        PropertyInfo::new(interner.intern_string("Down"), interner.literal_number(2.0)),
    ])
}

#[test]
fn test_keyof_object() {
    let interner = TypeInterner::new();
    let object = direction(&interner);

    let keys = keyof(&interner, object);

    assert_eq!(
        keys,
        interner.union2(interner.literal_string("Up"), interner.literal_string("Down"))
    );
}

#[test]
fn test_keyof_numeric_name_is_number_literal() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![PropertyInfo::numeric(
        interner.intern_string("1234"),
        TypeId::STRING,
    )]);

    assert_eq!(keyof(&interner, object), interner.literal_number(1234.0));
}

#[test]
fn test_keyof_union_keeps_common_keys() {
    let interner = TypeInterner::new();
    let a = interner.intern_string("a");
    let b = interner.intern_string("b");
    let left = interner.object(vec![
        PropertyInfo::new(a, TypeId::NUMBER),
        PropertyInfo::new(b, TypeId::NUMBER),
    ]);
    let right = interner.object(vec![PropertyInfo::new(a, TypeId::STRING)]);

    let keys = keyof(&interner, interner.union2(left, right));

    assert_eq!(keys, interner.literal_string("a"));
}

#[test]
fn test_keyof_empty_object_and_primitives() {
    let interner = TypeInterner::new();

    assert_eq!(keyof(&interner, interner.object(vec![])), TypeId::NEVER);
    assert_eq!(keyof(&interner, TypeId::NULL), TypeId::NEVER);
    assert_eq!(keyof(&interner, TypeId::ERROR), TypeId::ERROR);
}

#[test]
fn test_index_access() {
    let interner = TypeInterner::new();
    let object = direction(&interner);
    let mut evaluator = TypeEvaluator::new(&interner);

    assert_eq!(
        evaluator.evaluate_index_access(object, interner.literal_string("Up")),
        Some(interner.literal_number(1.0))
    );
    assert_eq!(
        evaluator.evaluate_index_access(object, interner.literal_number(4.0)),
        None
    );

    let both = interner.union2(interner.literal_string("Up"), interner.literal_string("Down"));
    assert_eq!(
        evaluator.evaluate_index_access(object, both),
        Some(interner.union2(interner.literal_number(1.0), interner.literal_number(2.0)))
    );
}

#[test]
fn test_index_access_by_number_finds_string_name() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![PropertyInfo::new(
        interner.intern_string("1"),
        interner.literal_string("Up"),
    )]);
    let mut evaluator = TypeEvaluator::new(&interner);

    assert_eq!(
        evaluator.evaluate_index_access(object, interner.literal_number(1.0)),
        Some(interner.literal_string("Up"))
    );
}

#[test]
fn test_value_of() {
    let interner = TypeInterner::new();
    let object = direction(&interner);

    assert_eq!(
        value_of(&interner, object),
        interner.union2(interner.literal_number(1.0), interner.literal_number(2.0))
    );
    assert_eq!(value_of(&interner, TypeId::STRING), TypeId::NEVER);
}
