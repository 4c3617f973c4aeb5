use crate::evaluate::{ensure_string_keys, keyof};
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::{PropertyInfo, PropertyNameKind, TypeId};

#[test]
fn test_ensure_string_keys_numeric_names() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![
        PropertyInfo::numeric(interner.intern_string("1234"), interner.reference("RegExp")),
        PropertyInfo::new(interner.intern_string("female"), interner.literal_string("♀")),
    ]);

    let stringified = ensure_string_keys(&interner, object);

    assert!(
        interner
            .object_properties(stringified)
            .iter()
            .all(|prop| prop.name_kind == PropertyNameKind::String)
    );
    assert_eq!(
        keyof(&interner, stringified),
        interner.union2(interner.literal_string("1234"), interner.literal_string("female"))
    );
    assert_eq!(
        TypeFormatter::new(&interner).format(stringified),
        "{ \"1234\": RegExp; female: \"♀\"; }"
    );
}

#[test]
fn test_ensure_string_keys_is_identity_on_string_keys() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![PropertyInfo::new(
        interner.intern_string("Up"),
        interner.literal_number(1.0),
    )]);

    assert_eq!(ensure_string_keys(&interner, object), object);
}

#[test]
fn test_ensure_string_keys_leaves_primitives() {
    let interner = TypeInterner::new();

    assert_eq!(ensure_string_keys(&interner, TypeId::STRING), TypeId::STRING);
    let tuple = interner.tuple_of(&[TypeId::NUMBER]);
    assert_eq!(ensure_string_keys(&interner, tuple), tuple);
}
