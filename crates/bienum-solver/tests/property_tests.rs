use super::*;
use crate::types::PropertyInfo;

fn direction(interner: &TypeInterner) -> TypeId {
    interner.object(vec![
        PropertyInfo::new(interner.intern_string("Up"), interner.literal_number(1.0)),
        PropertyInfo::new(interner.intern_string("1"), interner.literal_string("Up")),
    ])
}

#[test]
fn test_property_found() {
    let interner = TypeInterner::new();
    let object = direction(&interner);

    assert_eq!(
        property_type(&interner, object, "Up").type_id(),
        Some(interner.literal_number(1.0))
    );
    assert_eq!(
        property_type_by_index(&interner, object, 1.0).type_id(),
        Some(interner.literal_string("Up"))
    );
}

#[test]
fn test_property_not_found() {
    let interner = TypeInterner::new();
    let object = direction(&interner);

    let result = property_type_by_index(&interner, object, 4.0);

    assert!(matches!(result, PropertyAccessResult::PropertyNotFound { .. }));
    let diagnostic = result.to_diagnostic(&interner).expect("should report");
    assert_eq!(diagnostic.code, 2339);
    assert_eq!(
        diagnostic.message,
        "Property '4' does not exist on type '{ \"1\": \"Up\"; Up: 1; }'."
    );
}

#[test]
fn test_property_on_nullable_union() {
    let interner = TypeInterner::new();
    let object = interner.union2(direction(&interner), TypeId::UNDEFINED);

    let result = property_type(&interner, object, "Up");

    assert_eq!(
        result,
        PropertyAccessResult::PossiblyNullOrUndefined {
            property_type: Some(interner.literal_number(1.0)),
            cause: TypeId::UNDEFINED,
        }
    );
    assert_eq!(
        result.to_diagnostic(&interner).map(|d| d.message),
        Some("Object is possibly 'undefined'.".to_string())
    );
}

#[test]
fn test_property_on_top_types() {
    let interner = TypeInterner::new();

    assert_eq!(property_type(&interner, TypeId::UNKNOWN, "x"), PropertyAccessResult::IsUnknown);
    assert_eq!(
        property_type(&interner, TypeId::ANY, "x").type_id(),
        Some(TypeId::ANY)
    );
}
