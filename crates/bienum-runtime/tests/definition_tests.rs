use super::*;

#[test]
fn test_builder_collects_entries_in_order() {
    let definition = Definition::new().entry("Up", 1).entry("Down", 2);

    assert_eq!(definition.labels().collect::<Vec<_>>(), ["Up", "Down"]);
    assert_eq!(
        definition.values().cloned().collect::<Vec<_>>(),
        [Value::Number(1.0), Value::Number(2.0)]
    );
}

#[test]
fn test_duplicate_label_is_last_write_wins() {
    let mut definition = Definition::new().entry("A", 1).entry("B", 2);
    assert_eq!(definition.insert("A", 3), Some(Value::Number(1.0)));

    assert_eq!(definition.len(), 2);
    assert_eq!(definition.get("A"), Some(&Value::Number(3.0)));
    assert_eq!(definition.labels().collect::<Vec<_>>(), ["A", "B"]);
}

#[test]
fn test_numeric_labels_enumerate_first() {
    let definition = Definition::new()
        .entry("female", "♀")
        .entry(1234, Value::regexp("^(fe)?male$", ""))
        .entry("male", "♂");

    assert_eq!(definition.labels().collect::<Vec<_>>(), ["1234", "female", "male"]);
}

#[test]
fn test_from_json_str_reads_an_object() {
    let definition = Definition::from_json_str(
        r##"{"red": 16711680, "green": "rgb(0, 255, 0)", "blueLike": ["#B2FFFF", "#002366"], "unset": null}"##,
    )
    .expect("valid definition");

    assert_eq!(
        definition.labels().collect::<Vec<_>>(),
        ["red", "green", "blueLike", "unset"]
    );
    assert_eq!(definition.get("unset"), Some(&Value::Null));
    assert!(matches!(definition.get("blueLike"), Some(Value::Array(items)) if items.len() == 2));
}

#[test]
fn test_from_json_rejects_non_objects() {
    let err = Definition::from_json_str("[1, 2]").expect_err("arrays are not definitions");
    assert!(matches!(err, DefinitionError::NotAnObject { found: "an array" }));
    assert_eq!(err.to_string(), "a definition must be a JSON object, found an array");
}

#[test]
fn test_from_json_reports_syntax_errors() {
    let err = Definition::from_json_str("{\"Up\": ").expect_err("truncated input");
    assert!(matches!(err, DefinitionError::Json(_)));
    assert!(err.to_string().starts_with("invalid definition JSON"));
}

#[test]
fn test_empty_definition() {
    let definition = Definition::from_json_str("{}").expect("empty object is fine");
    assert!(definition.is_empty());
}
