use crate::{
    context::RequestContext,
    error::{Error, ValidationError, ValidationIssue},
    model::FieldCard,
    serializer::{Position, Serializer},
    store::{RecordStore, StoreError},
    value::{Payload, Value, coerce_id, coerce_scalar},
};
use serde_json::{Map as JsonMap, Value as Json};
use tracing::trace;

impl Serializer<'_> {
    /// Validate one inbound payload into a `Payload`.
    ///
    /// Root validation strips the identifier field. For a bulk item
    /// under PUT or PATCH the identifier is injected back afterwards:
    /// the bulk resolver needs it downstream.
    pub fn validate(
        &self,
        store: &mut dyn RecordStore,
        ctx: &RequestContext,
        raw: &Json,
    ) -> Result<Payload, Error> {
        let obj = as_object(raw)?;
        let mut payload = self.standard_validate(store, ctx, obj)?;

        if self.position() == Position::BulkItem && ctx.method.is_update() {
            let id_field = self.model().id_field.clone();
            if let Some(raw_id) = obj.get(id_field.as_str()) {
                let id = coerce_id(raw_id).map_err(|err| {
                    Error::from(ValidationError::single(id_field.as_str(), err.to_string()))
                })?;
                payload.insert(id_field, Value::Uint(id.get()));
            }
        }

        Ok(payload)
    }

    /// Standard field validation: coerce scalars, delegate nested
    /// fields to child serializers, collect issues, surface them once.
    pub(crate) fn standard_validate(
        &self,
        store: &mut dyn RecordStore,
        ctx: &RequestContext,
        obj: &JsonMap<String, Json>,
    ) -> Result<Payload, Error> {
        let mut payload = Payload::new();
        let mut issues: Vec<ValidationIssue> = Vec::new();

        for field in self.active_fields() {
            // identity is routing, not data
            if field.name == self.model().id_field {
                continue;
            }

            let Some(raw) = obj.get(field.name.as_str()) else {
                if !self.is_partial() && field.required {
                    issues.push(ValidationIssue::new(
                        field.name.as_str(),
                        "this field is required",
                    ));
                }
                continue;
            };

            match &field.card {
                FieldCard::Scalar(kind) => match coerce_scalar(*kind, raw) {
                    Ok(value) => set_value(&mut payload, &field.source, value),
                    Err(err) => {
                        issues.push(ValidationIssue::new(field.name.as_str(), err.to_string()));
                    }
                },

                FieldCard::NestedSingle { target } => {
                    match self.resolve_nested(store, ctx, target, raw) {
                        Ok(value) => set_value(&mut payload, &field.source, value),
                        Err(Error::Validation(inner)) => {
                            issues.extend(inner.with_prefix(&field.name).issues);
                        }
                        Err(other) => return Err(other),
                    }
                }

                FieldCard::NestedMany { target } => {
                    let Some(items) = raw.as_array() else {
                        issues.push(ValidationIssue::new(
                            field.name.as_str(),
                            "expected an array of nested objects",
                        ));
                        continue;
                    };

                    let mut refs = Vec::with_capacity(items.len());
                    let mut failed = false;
                    for (index, item) in items.iter().enumerate() {
                        match self.resolve_nested(store, ctx, target, item) {
                            Ok(value) => refs.push(value),
                            Err(Error::Validation(inner)) => {
                                failed = true;
                                let prefix = format!("{}[{index}]", field.name);
                                issues.extend(inner.with_prefix(&prefix).issues);
                            }
                            Err(other) => return Err(other),
                        }
                    }
                    if !failed {
                        set_value(&mut payload, &field.source, Value::List(refs));
                    }
                }

                FieldCard::ManyRelation { target } => {
                    let Some(items) = raw.as_array() else {
                        issues.push(ValidationIssue::new(
                            field.name.as_str(),
                            "expected an array of record ids",
                        ));
                        continue;
                    };

                    let mut refs = Vec::with_capacity(items.len());
                    let mut failed = false;
                    for (index, item) in items.iter().enumerate() {
                        let path = format!("{}[{index}]", field.name);
                        let id = match coerce_id(item) {
                            Ok(id) => id,
                            Err(err) => {
                                failed = true;
                                issues.push(ValidationIssue::new(path, err.to_string()));
                                continue;
                            }
                        };
                        match store.get(target, id) {
                            Ok(_) => refs.push(Value::Ref(id)),
                            Err(StoreError::NotFound { .. }) => {
                                failed = true;
                                issues.push(ValidationIssue::new(
                                    path,
                                    format!("related record {id} does not exist"),
                                ));
                            }
                            Err(other) => return Err(other.into()),
                        }
                    }
                    if !failed {
                        set_value(&mut payload, &field.source, Value::List(refs));
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(payload)
        } else {
            Err(ValidationError::new(issues).into())
        }
    }

    /// Nested validation routing.
    ///
    /// With an identifier: fetch the record, validate the remaining
    /// fields in partial mode against it, apply and save. Without one:
    /// validate in full mode and create. Lookup failures on the fetch
    /// pass through from the store unmodified.
    fn resolve_nested(
        &self,
        store: &mut dyn RecordStore,
        ctx: &RequestContext,
        target: &str,
        raw: &Json,
    ) -> Result<Value, Error> {
        let obj = as_object(raw)?;
        let id_field = self.schema().record(target)?.id_field.clone();

        if let Some(raw_id) = obj.get(id_field.as_str()) {
            let id = coerce_id(raw_id).map_err(|err| {
                Error::from(ValidationError::single(id_field.as_str(), err.to_string()))
            })?;

            let record = store.get(target, id)?;
            trace!(record_type = target, %id, "nested payload resolved by identifier");

            let child = self.child(target, true)?;
            let payload = child.standard_validate(store, ctx, obj)?;
            let updated = child.update(store, record, payload)?;

            Ok(Value::Ref(updated.id()))
        } else {
            let child = self.child(target, false)?;
            let payload = child.standard_validate(store, ctx, obj)?;
            let created = child.create(store, payload)?;
            trace!(record_type = target, id = %created.id(), "nested payload created");

            Ok(Value::Ref(created.id()))
        }
    }
}

fn as_object(raw: &Json) -> Result<&JsonMap<String, Json>, Error> {
    raw.as_object()
        .ok_or_else(|| ValidationError::single("", "expected an object").into())
}

/// Store a validated value under its full source path, building
/// intermediate maps for dotted sources.
pub(crate) fn set_value(payload: &mut Payload, source: &[String], value: Value) {
    let Some((leaf, prefix)) = source.split_last() else {
        return;
    };

    let mut map = payload;
    for segment in prefix {
        if !matches!(map.get(segment), Some(Value::Map(_))) {
            map.insert(segment.clone(), Value::Map(Payload::new()));
        }
        let Some(Value::Map(next)) = map.get_mut(segment) else {
            return;
        };
        map = next;
    }

    map.insert(leaf.clone(), value);
}
