use crate::{
    model::ScalarKind,
    types::{Date, Duration, Float64, FloatError, RecordId, TemporalError, TimeOfDay, Timestamp},
    value::Value,
};
use serde_json::Value as Json;
use thiserror::Error as ThisError;

///
/// CoerceError
///
/// Why one inbound JSON value could not become a `Value` of the target
/// scalar kind. Rendered into a `ValidationIssue` by the serializer.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum CoerceError {
    #[error(transparent)]
    Float(#[from] FloatError),

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value may not be null")]
    Null,

    #[error(transparent)]
    Temporal(#[from] TemporalError),
}

/// JSON-side type name for diagnostics.
const fn json_kind(raw: &Json) -> &'static str {
    match raw {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Integer reading in the loose style of the source wire format:
/// integers, integer-valued floats, and numeric strings all count.
fn integer_from(raw: &Json) -> Option<i64> {
    if let Some(n) = raw.as_i64() {
        return Some(n);
    }
    if let Some(f) = raw.as_f64() {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            #[allow(clippy::cast_possible_truncation)]
            return Some(f as i64);
        }
        return None;
    }
    if let Some(s) = raw.as_str() {
        return s.trim().parse::<i64>().ok();
    }

    None
}

fn unsigned_from(raw: &Json) -> Option<u64> {
    if let Some(n) = raw.as_u64() {
        return Some(n);
    }

    integer_from(raw).and_then(|n| u64::try_from(n).ok())
}

fn float_from(raw: &Json) -> Option<f64> {
    raw.as_f64().or_else(|| {
        raw.as_str()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|f| f.is_finite())
    })
}

/// Coerce one inbound JSON scalar into a `Value` of the given kind.
pub(crate) fn coerce_scalar(kind: ScalarKind, raw: &Json) -> Result<Value, CoerceError> {
    if raw.is_null() {
        return Err(CoerceError::Null);
    }

    let mismatch = |expected: &'static str| CoerceError::Mismatch {
        expected,
        found: json_kind(raw),
    };

    match kind {
        ScalarKind::Bool => raw.as_bool().map(Value::Bool).ok_or(mismatch("boolean")),
        ScalarKind::Int => integer_from(raw).map(Value::Int).ok_or(mismatch("integer")),
        ScalarKind::Uint => unsigned_from(raw)
            .map(Value::Uint)
            .ok_or(mismatch("unsigned integer")),
        ScalarKind::Float => {
            let f = float_from(raw).ok_or(mismatch("number"))?;
            Ok(Value::Float(Float64::try_new(f)?))
        }
        ScalarKind::Text => raw
            .as_str()
            .map(|s| Value::Text(s.to_string()))
            .ok_or(mismatch("string")),
        ScalarKind::Timestamp => {
            let secs = integer_from(raw).ok_or(mismatch("epoch seconds"))?;
            let ts = Timestamp::from_epoch_seconds(secs);
            ts.to_datetime()?;
            Ok(Value::Timestamp(ts))
        }
        ScalarKind::Date => {
            let secs = integer_from(raw).ok_or(mismatch("epoch seconds"))?;
            Ok(Value::Date(Date::from_epoch_seconds(secs)?))
        }
        ScalarKind::TimeOfDay => {
            let secs = integer_from(raw)
                .and_then(|n| u32::try_from(n).ok())
                .ok_or(mismatch("seconds since midnight"))?;
            Ok(Value::TimeOfDay(TimeOfDay::from_seconds_since_midnight(
                secs,
            )?))
        }
        ScalarKind::Duration => {
            let secs = float_from(raw).ok_or(mismatch("seconds"))?;
            Ok(Value::Duration(Duration::from_seconds_f64(secs)?))
        }
        ScalarKind::Ref => unsigned_from(raw)
            .map(|n| Value::Ref(RecordId::new(n)))
            .ok_or(mismatch("record id")),
    }
}

/// Coerce an inbound identifier value.
pub(crate) fn coerce_id(raw: &Json) -> Result<RecordId, CoerceError> {
    if raw.is_null() {
        return Err(CoerceError::Null);
    }

    unsigned_from(raw)
        .map(RecordId::new)
        .ok_or(CoerceError::Mismatch {
            expected: "record id",
            found: json_kind(raw),
        })
}
