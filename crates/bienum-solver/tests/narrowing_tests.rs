use super::*;

fn values(interner: &TypeInterner) -> TypeId {
    interner.union2(interner.literal_number(1.0), interner.literal_number(2.0))
}

#[test]
fn test_narrow_number_by_value_guard() {
    let interner = TypeInterner::new();
    let guard = interner.type_predicate(values(&interner));

    assert_eq!(narrow_by_guard(&interner, TypeId::NUMBER, guard), values(&interner));
}

#[test]
fn test_narrow_unknown_is_guarded_type() {
    let interner = TypeInterner::new();
    let guard = interner.type_predicate(values(&interner));

    assert_eq!(narrow_by_guard(&interner, TypeId::UNKNOWN, guard), values(&interner));
    assert_eq!(narrow_by_guard(&interner, TypeId::ANY, guard), values(&interner));
}

#[test]
fn test_narrow_keeps_matching_members() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let declared = interner.union(vec![one, TypeId::STRING, TypeId::NULL]);

    assert_eq!(narrow_by_guard(&interner, declared, values(&interner)), one);
}

#[test]
fn test_narrow_disjoint_is_never() {
    let interner = TypeInterner::new();
    let labels = interner.union2(interner.literal_string("Up"), interner.literal_string("Down"));

    assert_eq!(
        narrow_by_guard(&interner, TypeId::NUMBER, interner.type_predicate(labels)),
        TypeId::NEVER
    );
}

#[test]
fn test_narrow_string_by_label_guard() {
    let interner = TypeInterner::new();
    let labels = interner.union2(interner.literal_string("Up"), interner.literal_string("Down"));

    assert_eq!(
        narrow_by_guard(&interner, TypeId::STRING, interner.type_predicate(labels)),
        labels
    );
}

#[test]
fn test_narrow_excluding_guard() {
    let interner = TypeInterner::new();
    let context = NarrowingContext::new(&interner);
    let one = interner.literal_number(1.0);
    let declared = interner.union2(one, TypeId::STRING);

    assert_eq!(context.narrow_excluding_guard(declared, values(&interner)), TypeId::STRING);
    assert_eq!(
        context.narrow_excluding_guard(TypeId::NUMBER, values(&interner)),
        TypeId::NUMBER
    );
}
