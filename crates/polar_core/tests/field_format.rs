use polar_core::{Color, FieldValue, Number, ObjectRef};
use serde_json::{Value, json};

fn format(value: Value) -> String {
    FieldValue::from_json(&value).to_string()
}

#[test]
fn formats_scalars() {
    assert_eq!(format(Value::Null), "{fileID: 0}");
    assert_eq!(format(json!(true)), "1");
    assert_eq!(format(json!(false)), "0");
    assert_eq!(format(json!(250)), "250");
    assert_eq!(format(json!(-3)), "-3");
    assert_eq!(format(json!(0.2)), "0.2");
    assert_eq!(format(json!(1.0)), "1.0");
    assert_eq!(format(json!("Laser Mk2")), "Laser Mk2");
    assert_eq!(format(json!("")), "");
}

#[test]
fn formats_color_records() {
    assert_eq!(
        format(json!({"r": 0, "g": 1, "b": 0, "a": 1})),
        "{r: 0, g: 1, b: 0, a: 1}"
    );
    assert_eq!(
        format(json!({"r": 1, "g": 0.8, "b": 0.2})),
        "{r: 1, g: 0.8, b: 0.2, a: 1}"
    );
}

#[test]
fn four_number_sequence_is_a_positional_color() {
    assert_eq!(format(json!([0, 1, 0, 1])), "{r: 0, g: 1, b: 0, a: 1}");
    assert_eq!(format(json!([1, 1, 0, 1])), "{r: 1, g: 1, b: 0, a: 1}");
}

#[test]
fn other_sequences_fall_back_to_null_reference() {
    assert_eq!(format(json!([1, 1, 0])), "{fileID: 0}");
    assert_eq!(format(json!([1, 1, 0, "x"])), "{fileID: 0}");
    assert_eq!(format(json!([])), "{fileID: 0}");
}

#[test]
fn formats_reference_records() {
    assert_eq!(format(json!({"fileID": 7})), "{fileID: 7}");
    assert_eq!(
        format(json!({"fileID": 5, "guid": "abc"})),
        "{fileID: 5, guid: abc, type: 3}"
    );
    assert_eq!(
        format(json!({"fileID": 5, "guid": "abc", "type": 2})),
        "{fileID: 5, guid: abc, type: 2}"
    );
}

#[test]
fn unrecognised_records_fall_back_to_null_reference() {
    assert_eq!(format(json!({})), "{fileID: 0}");
    assert_eq!(format(json!({"guid": "abc"})), "{fileID: 0}");
    assert_eq!(format(json!({"r": "red", "g": 0, "b": 0})), "{fileID: 0}");
    assert_eq!(format(json!({"fileID": "five"})), "{fileID: 0}");
}

#[test]
fn color_wins_over_reference_when_both_shapes_match() {
    assert_eq!(
        format(json!({"r": 1, "g": 1, "b": 1, "fileID": 3})),
        "{r: 1, g: 1, b: 1, a: 1}"
    );
}

#[test]
fn asset_links_use_asset_reference_type() {
    let link = FieldValue::asset_link(Some(&json!({"fileID": 5, "guid": "abc"})));
    assert_eq!(link.to_string(), "{fileID: 5, guid: abc, type: 2}");

    let implicit = FieldValue::asset_link(Some(&json!({"guid": "abc"})));
    assert_eq!(implicit.to_string(), "{fileID: 11400000, guid: abc, type: 2}");
}

#[test]
fn asset_links_without_guid_are_null() {
    assert!(FieldValue::asset_link(None).is_null());
    assert!(FieldValue::asset_link(Some(&json!(""))).is_null());
    assert!(FieldValue::asset_link(Some(&json!("Icons/laser"))).is_null());
    assert!(FieldValue::asset_link(Some(&json!({"fileID": 5}))).is_null());
}

#[test]
fn scalar_formatting_is_stable_through_parse() {
    let values = [
        FieldValue::Integer(250),
        FieldValue::Integer(-12),
        FieldValue::Float(0.2),
        FieldValue::Float(1.0),
        FieldValue::Float(-0.125),
        FieldValue::Bool(true),
        FieldValue::Bool(false),
        FieldValue::text("weapon_bullet_fire"),
        FieldValue::text("Laser Mk2"),
        FieldValue::text("007"),
        FieldValue::text("1.50"),
        FieldValue::text("+5"),
        FieldValue::text("1e3"),
        FieldValue::text("-0"),
        FieldValue::Unsigned(u64::MAX),
        FieldValue::Null,
        FieldValue::Color(Color::rgba(
            Number::Integer(1),
            Number::Float(0.5),
            Number::Integer(0),
            Number::Integer(1),
        )),
        FieldValue::Reference(ObjectRef::external(5, "abc", 3)),
    ];
    for value in values {
        let text = value.to_string();
        assert_eq!(FieldValue::parse_scalar(&text).to_string(), text, "{value:?}");
    }
}

#[test]
fn parse_scalar_reads_numbers_and_json_shapes() {
    assert_eq!(FieldValue::parse_scalar("42"), FieldValue::Integer(42));
    assert_eq!(FieldValue::parse_scalar("0.75"), FieldValue::Float(0.75));
    assert_eq!(FieldValue::parse_scalar("Beam"), FieldValue::text("Beam"));
    assert_eq!(FieldValue::parse_scalar("nan"), FieldValue::text("nan"));
    assert_eq!(FieldValue::parse_scalar("007"), FieldValue::text("007"));
    assert_eq!(FieldValue::parse_scalar("1.0"), FieldValue::Float(1.0));
    assert_eq!(
        FieldValue::parse_scalar(r#"{"r":1,"g":0,"b":0}"#).to_string(),
        "{r: 1, g: 0, b: 0, a: 1}"
    );
}

#[test]
fn integers_beyond_i64_print_exactly() {
    assert_eq!(format(json!(u64::MAX)), "18446744073709551615");
    assert_eq!(format(json!(9223372036854775808u64)), "9223372036854775808");
    assert_eq!(
        format(json!({"r": u64::MAX, "g": 0, "b": 0})),
        "{r: 18446744073709551615, g: 0, b: 0, a: 1}"
    );
    assert_eq!(
        FieldValue::parse_scalar("18446744073709551615"),
        FieldValue::Unsigned(u64::MAX)
    );
}
