use super::*;
use crate::types::PropertyInfo;

#[test]
fn test_format_intrinsics_and_literals() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);

    assert_eq!(fmt.format(TypeId::NEVER), "never");
    assert_eq!(fmt.format(TypeId::ERROR), "error");
    assert_eq!(fmt.format(TypeId::BOOLEAN_TRUE), "true");
    assert_eq!(fmt.format(interner.literal_string("Up")), "\"Up\"");
    assert_eq!(fmt.format(interner.literal_number(1.5)), "1.5");
    assert_eq!(fmt.format(interner.literal_number(1e21)), "1e+21");
    assert_eq!(fmt.format(interner.literal_bigint("10")), "10n");
}

#[test]
fn test_format_string_escapes() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);

    assert_eq!(fmt.format(interner.literal_string("a\"b")), "\"a\\\"b\"");
}

#[test]
fn test_format_union_and_array() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let union = interner.union2(one, two);

    assert_eq!(fmt.format(union), "1 | 2");
    assert_eq!(fmt.format(interner.array(union)), "(1 | 2)[]");
    assert_eq!(
        fmt.format(interner.union2(TypeId::BOOLEAN, TypeId::NULL)),
        "null | boolean"
    );
}

#[test]
fn test_format_tuples() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);
    let tuple = interner.tuple_of(&[interner.literal_string("Up"), TypeId::NUMBER]);

    assert_eq!(fmt.format(tuple), "[\"Up\", number]");
    assert_eq!(fmt.format(interner.readonly(tuple)), "readonly [\"Up\", number]");
    assert_eq!(fmt.format(interner.tuple_of(&[])), "[]");
}

#[test]
fn test_format_object_property_names() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);
    let object = interner.object(vec![
        PropertyInfo::numeric(interner.intern_string("1234"), TypeId::STRING),
        PropertyInfo::new(interner.intern_string("1"), TypeId::STRING),
        PropertyInfo::new(interner.intern_string("female"), TypeId::STRING),
        PropertyInfo::new(interner.intern_string("♀"), TypeId::STRING),
    ]);

    assert_eq!(
        fmt.format(object),
        "{ \"1\": string; 1234: string; female: string; \"♀\": string; }"
    );
    assert_eq!(fmt.format(interner.object(vec![])), "{}");
}

#[test]
fn test_format_object_max_width() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner).with_max_width(10);
    let object = interner.object(vec![PropertyInfo::new(
        interner.intern_string("somewhatLongName"),
        TypeId::STRING,
    )]);

    assert_eq!(fmt.format(object), "{ ...; }");
}

#[test]
fn test_format_predicate_and_reference() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);
    let guard = interner.type_predicate(interner.literal_number(1.0));

    assert_eq!(fmt.format(guard), "(arg: any) => arg is 1");
    assert_eq!(fmt.format(interner.reference("RegExp")), "RegExp");
}
