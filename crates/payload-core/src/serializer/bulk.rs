use crate::{
    context::RequestContext,
    error::{Error, ValidationError, ValidationIssue},
    model::Schema,
    serializer::{Position, Serializer, SerializerOptions},
    store::{Filter, Record, RecordStore},
    types::RecordId,
    value::{Payload, Value},
};
use serde_json::Value as Json;
use std::collections::BTreeMap;
use tracing::debug;

///
/// BulkUpdater
///
/// Updates a batch of existing records in one pass: one bulk fetch,
/// a count check that rejects the whole batch before any write, then
/// one single-record update per fetched record.
///

pub struct BulkUpdater<'a> {
    item: Serializer<'a>,
}

impl<'a> BulkUpdater<'a> {
    pub fn new(schema: &'a Schema, kind: &str) -> Result<Self, Error> {
        Self::with_options(schema, kind, SerializerOptions::default())
    }

    pub fn with_options(
        schema: &'a Schema,
        kind: &str,
        options: SerializerOptions,
    ) -> Result<Self, Error> {
        Ok(Self {
            item: Serializer::with_options(schema, kind, options)?.at_position(Position::BulkItem),
        })
    }

    /// The per-item serializer, e.g. for representing the results.
    #[must_use]
    pub const fn serializer(&self) -> &Serializer<'a> {
        &self.item
    }

    /// Validate raw items, then resolve and update the batch.
    pub fn update_batch(
        &self,
        store: &mut dyn RecordStore,
        ctx: &RequestContext,
        items: &[Json],
    ) -> Result<Vec<Record>, Error> {
        let mut payloads = Vec::with_capacity(items.len());
        let mut issues: Vec<ValidationIssue> = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match self.item.validate(store, ctx, item) {
                Ok(payload) => payloads.push(payload),
                Err(Error::Validation(inner)) => {
                    issues.extend(inner.with_prefix(&format!("[{index}]")).issues);
                }
                Err(other) => return Err(other),
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError::new(issues).into());
        }

        self.resolve(store, payloads)
    }

    /// Resolve validated payloads against existing records and update
    /// each one. Results come back in store-iteration order, not input
    /// order.
    pub fn resolve(
        &self,
        store: &mut dyn RecordStore,
        payloads: Vec<Payload>,
    ) -> Result<Vec<Record>, Error> {
        let id_field = self.item.model().id_field.as_str();

        let mut by_id: BTreeMap<RecordId, Payload> = BTreeMap::new();
        let mut issues: Vec<ValidationIssue> = Vec::new();

        for (index, mut payload) in payloads.into_iter().enumerate() {
            let id = match payload.remove(id_field) {
                Some(Value::Uint(raw)) => Some(RecordId::new(raw)),
                Some(Value::Ref(id)) => Some(id),
                _ => None,
            };
            match id {
                Some(id) => {
                    by_id.insert(id, payload);
                }
                None => issues.push(ValidationIssue::new(
                    format!("[{index}].{id_field}"),
                    "payload is missing its identifier",
                )),
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError::new(issues).into());
        }

        let kind = self.item.model().name.as_str();
        let records = store.query(kind, &Filter::id_in(by_id.keys().copied()))?;

        debug!(
            record_type = kind,
            requested = by_id.len(),
            found = records.len(),
            "bulk resolution"
        );

        // the count check runs before the update loop, so a batch
        // naming unknown identifiers rejects with nothing written
        if records.len() != by_id.len() {
            return Err(
                ValidationError::single("", "could not find all records to update").into(),
            );
        }

        let mut updated = Vec::with_capacity(records.len());
        for record in records {
            let Some(payload) = by_id.remove(&record.id()) else {
                continue;
            };
            updated.push(self.item.update(store, record, payload)?);
        }

        Ok(updated)
    }
}
