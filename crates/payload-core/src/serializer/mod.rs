mod bulk;
mod create;
mod update;
mod validate;


use crate::{
    error::Error,
    model::{FieldModel, RecordModel, Schema},
    store::Record,
    value::Value,
};
use serde_json::{Map as JsonMap, Value as Json};
use std::collections::BTreeSet;

// re-exports
pub use bulk::BulkUpdater;

///
/// SerializerOptions
///
/// Per-instantiation behavior: an optional comma-separated allow-list
/// of field names, and partial mode (absent fields pass validation).
///

#[derive(Clone, Debug, Default)]
pub struct SerializerOptions {
    fields: Option<String>,
    partial: bool,
}

impl SerializerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the active field set, e.g. `"id,title,author"`.
    #[must_use]
    pub fn fields(mut self, list: impl Into<String>) -> Self {
        self.fields = Some(list.into());
        self
    }

    #[must_use]
    pub const fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }
}

///
/// Position
///
/// Where this serializer sits in the validation tree. Drives the
/// validation routing; tracked explicitly, never read from ambient
/// state.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Position {
    BulkItem,
    Nested,
    Root,
}

///
/// Serializer
///
/// Field-filtering, validation, creation, and nested update of a
/// single record type against a `RecordStore`.
///

pub struct Serializer<'a> {
    schema: &'a Schema,
    model: &'a RecordModel,
    active: Vec<String>,
    partial: bool,
    position: Position,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema, kind: &str) -> Result<Self, Error> {
        Self::with_options(schema, kind, SerializerOptions::default())
    }

    pub fn with_options(
        schema: &'a Schema,
        kind: &str,
        options: SerializerOptions,
    ) -> Result<Self, Error> {
        let model = schema.record(kind)?;

        // unspecified allow-list means no filtering; unknown names in
        // the list fall away (set intersection)
        let active = match options.fields.as_deref() {
            None => model.fields.iter().map(|f| f.name.clone()).collect(),
            Some(list) => {
                let allowed: BTreeSet<&str> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect();

                model
                    .fields
                    .iter()
                    .filter(|f| allowed.contains(f.name.as_str()))
                    .map(|f| f.name.clone())
                    .collect()
            }
        };

        Ok(Self {
            schema,
            model,
            active,
            partial: options.partial,
            position: Position::Root,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &RecordModel {
        self.model
    }

    pub(crate) const fn at_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    pub(crate) const fn is_partial(&self) -> bool {
        self.partial
    }

    /// Child serializer for a nested record type. Children carry the
    /// full field set; the allow-list applies to the root only.
    pub(crate) fn child(&self, target: &str, partial: bool) -> Result<Serializer<'a>, Error> {
        let schema = self.schema;
        let model = schema.record(target)?;

        Ok(Serializer {
            schema,
            model,
            active: model.fields.iter().map(|f| f.name.clone()).collect(),
            partial,
            position: Position::Nested,
        })
    }

    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.model
            .fields
            .iter()
            .filter(|f| self.active.iter().any(|name| name == &f.name))
    }

    pub(crate) const fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// JSON representation of a record, restricted to the active field
    /// set. Temporal values emit their epoch wire forms.
    #[must_use]
    pub fn represent(&self, record: &Record) -> Json {
        let mut obj = JsonMap::new();

        for field in self.active_fields() {
            if field.name == self.model.id_field {
                obj.insert(field.name.clone(), Json::Number(record.id().get().into()));
            } else {
                let value = record.get(&field.name).map_or(Json::Null, Value::to_json);
                obj.insert(field.name.clone(), value);
            }
        }

        Json::Object(obj)
    }
}
