//! The usage cases a bi-enum is built for.

use super::*;

#[test]
fn test_direction() {
    let direction = BiEnum::new(&Definition::new().entry("Up", 1).entry("Down", 2));

    assert_eq!(direction["Up"], Value::Number(1.0));
    assert_eq!(direction["Down"], Value::Number(2.0));
    assert_eq!(direction["1"], Value::from("Up"));
    assert_eq!(direction["2"], Value::from("Down"));
    assert_eq!(direction.all_labels(), ["Up", "Down"]);
    assert_eq!(direction.all_values(), [Value::Number(1.0), Value::Number(2.0)]);
    assert!(direction.is_value(1));
    assert!(!direction.is_value(3));
}

#[test]
fn test_gender_with_non_primitive_value() {
    let pattern = Value::regexp("^(fe)?male$", "");
    let gender = BiEnum::new(
        &Definition::new()
            .entry(1234, pattern.clone())
            .entry("female", "♀")
            .entry("male", "♂"),
    );

    assert_eq!(gender["1234"], pattern);
    assert_eq!(gender["♀"], Value::from("female"));
    assert_eq!(gender["♂"], Value::from("male"));
    assert!(!gender.contains_key("/^(fe)?male$/"));
    assert_eq!(
        gender.keys().collect::<Vec<_>>(),
        ["1234", "♀", "female", "♂", "male"]
    );
    assert_eq!(gender.all_labels(), ["1234", "female", "male"]);
}

#[test]
fn test_color_with_mixed_values() {
    let blue_like = Value::array(vec![Value::from("#B2FFFF"), Value::from("#002366")]);
    let color = BiEnum::new(
        &Definition::new()
            .entry("red", 0xff0000)
            .entry("green", "rgb(0, 255, 0)")
            .entry("blueLike", blue_like.clone())
            .entry("unset", ()),
    );

    assert_eq!(color["16711680"], Value::from("red"));
    assert_eq!(color["rgb(0, 255, 0)"], Value::from("green"));
    assert_eq!(color["null"], Value::from("unset"));
    assert_eq!(color["blueLike"], blue_like);
    assert!(!color.contains_key("#B2FFFF,#002366"));

    // A second bi-enum keyed by the first one's values.
    let description = BiEnum::new(
        &Definition::new()
            .entry(&color["red"], "description about red")
            .entry(&color["green"], "description about green")
            .entry("#B2FFFF", 1234),
    );
    assert_eq!(description["16711680"], Value::from("description about red"));
    assert_eq!(description["#B2FFFF"], Value::Number(1234.0));
    assert_eq!(description["1234"], Value::from("#B2FFFF"));
}

#[test]
fn test_helper_name_collision() {
    let hit_keyword = BiEnum::new(&Definition::new().entry("allLabels", 1).entry(2, "isLabel"));

    // Own entries with helper names exist on the instance itself.
    assert_eq!(hit_keyword["allLabels"], Value::Number(1.0));
    assert_eq!(hit_keyword["isLabel"], Value::from("2"));
    assert_eq!(hit_keyword.shadowed_helpers(), ["allLabels", "isLabel"]);

    // The helper record still exposes the original helpers.
    let prototype = hit_keyword.prototype();
    assert_eq!(prototype.all_labels(), ["2", "allLabels"]);
    assert_eq!(prototype.all_values(), [Value::from("isLabel"), Value::Number(1.0)]);
    assert!(prototype.is_label("2"));
    assert!(!prototype.is_label(2));
    assert!(prototype.is_value("isLabel"));
}
