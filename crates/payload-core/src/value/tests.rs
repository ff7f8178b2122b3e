use crate::{
    model::ScalarKind,
    types::{Duration, Float64, RecordId, TimeOfDay, Timestamp},
    value::{CoerceError, Payload, Value, coerce_id, coerce_scalar},
};
use proptest::prelude::*;
use serde_json::json;

// ---- helpers -----------------------------------------------------------

fn coerced(kind: ScalarKind, raw: serde_json::Value) -> Value {
    coerce_scalar(kind, &raw).expect("coercion should succeed")
}

fn rejected(kind: ScalarKind, raw: serde_json::Value) -> CoerceError {
    coerce_scalar(kind, &raw).expect_err("coercion should fail")
}

#[test]
fn scalars_coerce_directly() {
    assert_eq!(coerced(ScalarKind::Bool, json!(true)), Value::Bool(true));
    assert_eq!(coerced(ScalarKind::Int, json!(-7)), Value::Int(-7));
    assert_eq!(coerced(ScalarKind::Uint, json!(7)), Value::Uint(7));
    assert_eq!(
        coerced(ScalarKind::Text, json!("hello")),
        Value::Text("hello".to_string())
    );
    assert_eq!(
        coerced(ScalarKind::Float, json!(2.5)),
        Value::Float(Float64::try_new(2.5).expect("finite"))
    );
    assert_eq!(
        coerced(ScalarKind::Ref, json!(3)),
        Value::Ref(RecordId::new(3))
    );
}

#[test]
fn loose_integer_reading() {
    // integer-valued floats and numeric strings count
    assert_eq!(coerced(ScalarKind::Int, json!(4.0)), Value::Int(4));
    assert_eq!(coerced(ScalarKind::Int, json!(" 12 ")), Value::Int(12));
    assert_eq!(coerced(ScalarKind::Uint, json!("8")), Value::Uint(8));

    assert!(matches!(
        rejected(ScalarKind::Int, json!(4.5)),
        CoerceError::Mismatch { .. }
    ));
}

#[test]
fn uint_rejects_negative() {
    assert!(matches!(
        rejected(ScalarKind::Uint, json!(-1)),
        CoerceError::Mismatch { .. }
    ));
}

#[test]
fn float_rejects_non_finite_strings() {
    assert!(matches!(
        rejected(ScalarKind::Float, json!("nan")),
        CoerceError::Mismatch { .. }
    ));
}

#[test]
fn null_is_rejected_for_every_kind() {
    assert_eq!(rejected(ScalarKind::Text, json!(null)), CoerceError::Null);
    assert_eq!(
        rejected(ScalarKind::Timestamp, json!(null)),
        CoerceError::Null
    );
}

#[test]
fn timestamp_epoch_round_trip() {
    let value = coerced(ScalarKind::Timestamp, json!(1_700_000_000));
    assert_eq!(
        value,
        Value::Timestamp(Timestamp::from_epoch_seconds(1_700_000_000))
    );
    assert_eq!(value.to_json(), json!(1_700_000_000));
}

#[test]
fn timestamp_accepts_numeric_strings() {
    let value = coerced(ScalarKind::Timestamp, json!("1700000000"));
    assert_eq!(value.to_json(), json!(1_700_000_000));
}

#[test]
fn date_truncates_to_midnight_utc() {
    let Value::Date(date) = coerced(ScalarKind::Date, json!(1_700_000_042)) else {
        panic!("expected a date value");
    };

    assert_eq!(date.epoch_seconds() % 86_400, 0);
    assert!(date.epoch_seconds() <= 1_700_000_042);
    assert!(1_700_000_042 - date.epoch_seconds() < 86_400);
}

#[test]
fn time_of_day_wire_form() {
    let value = coerced(ScalarKind::TimeOfDay, json!(3_661));
    assert_eq!(
        value,
        Value::TimeOfDay(TimeOfDay::from_seconds_since_midnight(3_661).expect("in range"))
    );
    assert_eq!(value.to_json(), json!(3_661));

    assert!(matches!(
        rejected(ScalarKind::TimeOfDay, json!(86_400)),
        CoerceError::Temporal(_)
    ));
}

#[test]
fn duration_fractional_seconds() {
    let value = coerced(ScalarKind::Duration, json!(1.5));
    assert_eq!(
        value,
        Value::Duration(Duration::from_seconds_f64(1.5).expect("finite"))
    );
    assert_eq!(value.to_json(), json!(1.5));
}

#[test]
fn identifier_coercion() {
    assert_eq!(coerce_id(&json!(5)).expect("id"), RecordId::new(5));
    assert_eq!(coerce_id(&json!("5")).expect("id"), RecordId::new(5));
    assert!(coerce_id(&json!(-5)).is_err());
    assert!(coerce_id(&json!(null)).is_err());
}

#[test]
fn collection_wire_forms() {
    let mut map = Payload::new();
    map.insert("a".to_string(), Value::Uint(1));
    map.insert(
        "b".to_string(),
        Value::List(vec![Value::Ref(RecordId::new(2))]),
    );

    assert_eq!(Value::Map(map).to_json(), json!({"a": 1, "b": [2]}));
}

#[test]
fn value_helpers() {
    assert!(Value::Map(Payload::new()).is_empty_map());
    assert!(!Value::Null.is_empty_map());

    let refs = Value::List(vec![
        Value::Ref(RecordId::new(1)),
        Value::Ref(RecordId::new(2)),
    ]);
    assert_eq!(
        refs.ref_ids(),
        Some(vec![RecordId::new(1), RecordId::new(2)])
    );
    assert_eq!(Value::Text("x".to_string()).ref_ids(), None);
}

proptest! {
    #[test]
    fn timestamp_round_trip_is_identity(secs in -10_000_000_000i64..10_000_000_000i64) {
        let value = coerce_scalar(ScalarKind::Timestamp, &json!(secs)).expect("in range");
        prop_assert_eq!(value.to_json(), json!(secs));
    }

    #[test]
    fn duration_round_trip_is_close(secs in -1_000_000.0f64..1_000_000.0f64) {
        let value = coerce_scalar(ScalarKind::Duration, &json!(secs)).expect("finite");
        let back = value.to_json().as_f64().expect("number");
        prop_assert!((back - secs).abs() < 1e-6);
    }
}
