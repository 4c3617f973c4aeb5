use crate::evaluate::flip_mapping;
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::{PropertyInfo, TypeId};

fn prop(interner: &TypeInterner, name: &str, type_id: TypeId) -> PropertyInfo {
    PropertyInfo::new(interner.intern_string(name), type_id)
}

#[test]
fn test_flip_direction() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![
        prop(&interner, "Up", interner.literal_number(1.0)),
        prop(&interner, "Down", interner.literal_number(2.0)),
    ]);

    let flipped = flip_mapping(&interner, object);

    assert_eq!(
        TypeFormatter::new(&interner).format(flipped),
        "{ \"1\": \"Up\"; \"2\": \"Down\"; }"
    );
}

#[test]
fn test_flip_distributes_over_value_union() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![prop(
        &interner,
        "A",
        interner.union2(interner.literal_number(1.0), interner.literal_number(2.0)),
    )]);

    let flipped = flip_mapping(&interner, object);

    assert_eq!(
        TypeFormatter::new(&interner).format(flipped),
        "{ \"1\": \"A\"; \"2\": \"A\"; }"
    );
}

#[test]
fn test_flip_drops_non_primitive_values() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![
        PropertyInfo::numeric(interner.intern_string("1234"), interner.reference("RegExp")),
        prop(&interner, "female", interner.literal_string("♀")),
        prop(&interner, "male", interner.literal_string("♂")),
        prop(&interner, "big", interner.literal_bigint("1")),
    ]);

    let flipped = flip_mapping(&interner, object);

    assert_eq!(
        TypeFormatter::new(&interner).format(flipped),
        "{ \"♀\": \"female\"; \"♂\": \"male\"; }"
    );
}

#[test]
fn test_flip_collision_unions_names() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let object = interner.object(vec![prop(&interner, "A", one), prop(&interner, "B", one)]);

    let flipped = flip_mapping(&interner, object);
    let props = interner.object_properties(flipped);

    assert_eq!(props.len(), 1);
    assert_eq!(
        props[0].type_id,
        interner.union2(interner.literal_string("A"), interner.literal_string("B"))
    );
}

#[test]
fn test_flip_boolean_null_undefined() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![
        prop(&interner, "yes", TypeId::BOOLEAN_TRUE),
        prop(&interner, "nothing", TypeId::NULL),
        prop(&interner, "missing", TypeId::UNDEFINED),
    ]);

    let flipped = flip_mapping(&interner, object);

    assert_eq!(
        TypeFormatter::new(&interner).format(flipped),
        "{ null: \"nothing\"; true: \"yes\"; undefined: \"missing\"; }"
    );
}

#[test]
fn test_flip_numeric_name_value_is_string_literal() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![PropertyInfo::numeric(
        interner.intern_string("2"),
        interner.literal_string("isLabel"),
    )]);

    let flipped = flip_mapping(&interner, object);
    let props = interner.object_properties(flipped);

    assert_eq!(props[0].type_id, interner.literal_string("2"));
}

#[test]
fn test_flip_non_object() {
    let interner = TypeInterner::new();

    assert_eq!(flip_mapping(&interner, TypeId::ERROR), TypeId::ERROR);
    assert_eq!(
        flip_mapping(&interner, TypeId::STRING),
        interner.object(Vec::new())
    );
}

#[test]
fn test_flip_drops_non_literal_keys_under_trace_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    let interner = TypeInterner::new();
    let object = interner.object(vec![
        prop(&interner, "pattern", interner.reference("RegExp")),
        prop(&interner, "on", interner.literal_boolean(true)),
    ]);

    let flipped = tracing::subscriber::with_default(subscriber, || flip_mapping(&interner, object));

    assert_eq!(
        TypeFormatter::new(&interner).format(flipped),
        "{ true: \"on\"; }"
    );
}
