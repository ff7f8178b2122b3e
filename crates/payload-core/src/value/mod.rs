mod coerce;

#[cfg(test)]
mod tests;

use crate::types::{Date, Duration, Float64, RecordId, TimeOfDay, Timestamp};
use serde_json::{Map as JsonMap, Number, Value as Json};
use std::collections::BTreeMap;

// re-exports
pub use coerce::CoerceError;
pub(crate) use coerce::{coerce_id, coerce_scalar};

///
/// Payload
///
/// A validated mapping from field name to value. Nested payloads appear
/// as `Value::Map` entries; dotted-source fields are stored under their
/// full source path.
///

pub type Payload = BTreeMap<String, Value>;

///
/// Value
///
/// Runtime value vocabulary shared by payloads and records.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Null,

    // scalars
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(Float64),
    Text(String),
    Timestamp(Timestamp),
    Date(Date),
    TimeOfDay(TimeOfDay),
    Duration(Duration),
    Ref(RecordId),

    // collections
    List(Vec<Value>),
    Map(Payload),
}

impl Value {
    /// Stable name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Date(_) => "date",
            Self::TimeOfDay(_) => "time_of_day",
            Self::Duration(_) => "duration",
            Self::Ref(_) => "ref",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    #[must_use]
    pub const fn as_ref_id(&self) -> Option<RecordId> {
        match self {
            Self::Ref(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Payload> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map_mut(&mut self) -> Option<&mut Payload> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Self::Map(map) if map.is_empty())
    }

    /// Identifiers of a `Ref` or a list of `Ref`s.
    #[must_use]
    pub fn ref_ids(&self) -> Option<Vec<RecordId>> {
        match self {
            Self::Ref(id) => Some(vec![*id]),
            Self::List(items) => items.iter().map(Self::as_ref_id).collect(),
            _ => None,
        }
    }

    /// JSON wire representation. Temporal values emit their epoch forms.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(v) => Json::Bool(*v),
            Self::Int(v) => Json::Number((*v).into()),
            Self::Uint(v) => Json::Number((*v).into()),
            Self::Float(v) => Number::from_f64(v.get()).map_or(Json::Null, Json::Number),
            Self::Text(v) => Json::String(v.clone()),
            Self::Timestamp(v) => Json::Number(v.epoch_seconds().into()),
            Self::Date(v) => Json::Number(v.epoch_seconds().into()),
            Self::TimeOfDay(v) => Json::Number(v.seconds_since_midnight().into()),
            Self::Duration(v) => {
                Number::from_f64(v.as_seconds_f64()).map_or(Json::Null, Json::Number)
            }
            Self::Ref(id) => Json::Number(id.get().into()),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => {
                let mut obj = JsonMap::new();
                for (key, value) in map {
                    obj.insert(key.clone(), value.to_json());
                }
                Json::Object(obj)
            }
        }
    }
}
