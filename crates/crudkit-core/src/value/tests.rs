use crate::value::{EntityRef, FromValue, Value, ValueKind};
use serde_json::json;
use time::{Date, Month, OffsetDateTime};
use ulid::Ulid;

// ---- helpers -----------------------------------------------------------

fn date(y: i32, m: Month, d: u8) -> Date {
    Date::from_calendar_date(y, m, d).expect("valid calendar date")
}

fn to_json(value: &Value) -> serde_json::Value {
    serde_json::to_value(value).expect("value serializes")
}

// ---- kind / views ------------------------------------------------------

#[test]
fn kind_reports_discriminant() {
    let cases = [
        (Value::Null, ValueKind::Null),
        (Value::Bool(true), ValueKind::Bool),
        (Value::Int(-1), ValueKind::Int),
        (Value::Uint(1), ValueKind::Uint),
        (Value::Float64(0.5), ValueKind::Float64),
        (Value::from("a"), ValueKind::Text),
        (Value::Date(date(2024, Month::January, 2)), ValueKind::Date),
        (Value::Timestamp(OffsetDateTime::UNIX_EPOCH), ValueKind::Timestamp),
        (Value::Ulid(Ulid::from_parts(1, 2)), ValueKind::Ulid),
        (Value::Ref(EntityRef::new("Author", 7u64)), ValueKind::Ref),
        (Value::List(vec![]), ValueKind::List),
        (Value::Map(vec![]), ValueKind::Map),
    ];

    for (value, kind) in cases {
        assert_eq!(value.kind(), kind, "kind mismatch for {value:?}");
    }
}

#[test]
fn default_value_is_null() {
    assert!(Value::default().is_null());
}

#[test]
fn integer_views_cross_signedness_when_lossless() {
    assert_eq!(Value::Uint(5).as_i64(), Some(5));
    assert_eq!(Value::Uint(u64::MAX).as_i64(), None);
    assert_eq!(Value::Int(5).as_u64(), Some(5));
    assert_eq!(Value::Int(-5).as_u64(), None);
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::from("3").as_i64(), None);
}

#[test]
fn option_and_vec_conversions() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    assert_eq!(
        Value::from(vec![1i32, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn map_get_finds_entries_by_key() {
    let value = Value::Map(vec![
        ("street".to_string(), Value::from("Main")),
        ("zip".to_string(), Value::from(12345u32)),
    ]);

    assert_eq!(value.map_get("zip"), Some(&Value::Uint(12345)));
    assert_eq!(value.map_get("city"), None);
    assert_eq!(Value::Null.map_get("zip"), None);
}

#[test]
fn from_value_rejects_mismatched_shapes() {
    assert_eq!(bool::from_value(&Value::Bool(false)), Some(false));
    assert_eq!(bool::from_value(&Value::Int(0)), None);
    assert_eq!(String::from_value(&Value::from("hi")), Some("hi".to_string()));
    assert_eq!(String::from_value(&Value::Null), None);

    let d = date(2020, Month::March, 1);
    assert_eq!(Date::from_value(&Value::Date(d)), Some(d));
}

// ---- render encoding ---------------------------------------------------

#[test]
fn scalars_serialize_untagged() {
    assert_eq!(to_json(&Value::Null), json!(null));
    assert_eq!(to_json(&Value::Bool(true)), json!(true));
    assert_eq!(to_json(&Value::Int(-3)), json!(-3));
    assert_eq!(to_json(&Value::Uint(3)), json!(3));
    assert_eq!(to_json(&Value::from("Hello")), json!("Hello"));
}

#[test]
fn non_finite_floats_serialize_as_null() {
    assert_eq!(to_json(&Value::Float64(1.5)), json!(1.5));
    assert_eq!(to_json(&Value::Float64(f64::NAN)), json!(null));
    assert_eq!(to_json(&Value::Float64(f64::INFINITY)), json!(null));
    assert_eq!(to_json(&Value::Float64(f64::NEG_INFINITY)), json!(null));
}

#[test]
fn temporal_values_serialize_as_iso_strings() {
    assert_eq!(
        to_json(&Value::Date(date(2024, Month::January, 2))),
        json!("2024-01-02")
    );
    assert_eq!(
        to_json(&Value::Timestamp(OffsetDateTime::UNIX_EPOCH)),
        json!("1970-01-01T00:00:00Z")
    );
}

#[test]
fn ulid_serializes_as_canonical_string() {
    let id = Ulid::from_parts(1_700_000_000_000, 42);

    assert_eq!(to_json(&Value::Ulid(id)), json!(id.to_string()));
}

#[test]
fn composite_values_serialize_structurally() {
    let value = Value::List(vec![
        Value::Ref(EntityRef::new("Tag", 1u64)),
        Value::Map(vec![
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ]),
    ]);

    assert_eq!(
        to_json(&value),
        json!([{ "entity": "Tag", "key": 1 }, { "b": 2, "a": 1 }])
    );
}
