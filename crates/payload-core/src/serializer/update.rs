use crate::{
    error::{Error, ValidationError},
    model::{FieldCard, FieldModel, RecordModel},
    serializer::Serializer,
    store::{Record, RecordStore},
    value::{Payload, Value},
};
use tracing::trace;

impl Serializer<'_> {
    /// Update a record from a validated payload.
    ///
    /// Nested, relation, and dotted-source fields are applied first by
    /// walking their attribute paths; the remaining direct scalar
    /// fields follow standard update, and the record is persisted once.
    pub fn update(
        &self,
        store: &mut dyn RecordStore,
        record: Record,
        payload: Payload,
    ) -> Result<Record, Error> {
        let mut record = record;
        let mut payload = payload;

        // dotted sources first: their walk prunes the intermediate
        // payload maps, so a direct nested field sharing the head key
        // cannot swallow them afterwards
        for field in self.active_fields().filter(|f| !f.is_direct()) {
            self.apply_path_field(store, &mut record, &mut payload, field)?;
        }

        for field in self
            .active_fields()
            .filter(|f| f.is_direct() && !matches!(f.card, FieldCard::Scalar(_)))
        {
            self.apply_path_field(store, &mut record, &mut payload, field)?;
        }

        for field in self.active_fields() {
            if field.is_direct()
                && matches!(field.card, FieldCard::Scalar(_))
                && field.name != self.model().id_field
            {
                if let Some(value) = payload.remove(&field.name) {
                    record.set(field.name.clone(), value);
                }
            }
        }

        store.save(&record)?;

        Ok(record)
    }

    /// Resolve one field's source path against the record and the
    /// payload in lockstep, apply the leaf, persist the records walked
    /// through, and prune payload maps the extraction emptied.
    ///
    /// The walk is an explicit per-segment loop over a frame list; no
    /// recursion, no aliased mutation.
    fn apply_path_field(
        &self,
        store: &mut dyn RecordStore,
        record: &mut Record,
        payload: &mut Payload,
        field: &FieldModel,
    ) -> Result<(), Error> {
        let prefix = field.prefix();

        let Some(value) = take_at_path(payload, prefix, &field.name) else {
            return Ok(());
        };

        if prefix.is_empty() {
            // an intermediate map left by a dotted sibling is not this
            // field's value; put it back untouched
            if let Value::Map(map) = value {
                payload.insert(field.name.clone(), Value::Map(map));
                return Ok(());
            }
            apply_leaf(store, record, self.model(), &field.name, value)?;
            return Ok(());
        }

        // resolve the chain of related records named by the prefix
        let mut chain: Vec<Record> = Vec::with_capacity(prefix.len());
        let mut model: &RecordModel = self.model();

        for segment in prefix {
            let ref_id = {
                let current: &Record = chain.last().map_or(&*record, |r| r);
                current.get(segment).and_then(Value::as_ref_id)
            };
            let Some(ref_id) = ref_id else {
                return Err(ValidationError::single(
                    field.name.as_str(),
                    format!("record has no related reference at '{segment}'"),
                )
                .into());
            };

            let target = model
                .field(segment)
                .and_then(|f| f.card.target())
                .ok_or_else(|| {
                    ValidationError::single(
                        field.name.as_str(),
                        format!("'{segment}' is not a nested attribute"),
                    )
                })?
                .to_string();

            let next = store.get(&target, ref_id)?;
            model = self.schema().record(&target)?;
            chain.push(next);
        }

        trace!(
            record_type = self.model().name.as_str(),
            field = field.name.as_str(),
            depth = prefix.len(),
            "dotted path resolved"
        );

        let Some(mut leaf) = chain.pop() else {
            return Ok(());
        };
        apply_leaf(store, &mut leaf, model, &field.name, value)?;
        store.save(&leaf)?;

        for intermediate in chain.iter().rev() {
            store.save(intermediate)?;
        }

        prune_empty_path(payload, prefix);

        Ok(())
    }
}

/// Set or relate the final attribute on the record that owns it, by the
/// leaf field's capability on that record's model.
fn apply_leaf(
    store: &mut dyn RecordStore,
    record: &mut Record,
    model: &RecordModel,
    name: &str,
    value: Value,
) -> Result<(), Error> {
    let plural = model.field(name).is_some_and(|f| f.card.is_plural());

    if plural {
        let ids = value.ref_ids().ok_or_else(|| {
            ValidationError::single(name, "expected related record references")
        })?;
        let kind = record.kind().to_string();
        store.relate(&kind, record.id(), name, &ids)?;
        record.set(
            name.to_string(),
            Value::List(ids.into_iter().map(Value::Ref).collect()),
        );
    } else {
        record.set(name.to_string(), value);
    }

    Ok(())
}

/// Remove the leaf entry reached by descending the prefix segments.
/// Returns `None` if any level is absent or not a map.
pub(crate) fn take_at_path(payload: &mut Payload, prefix: &[String], leaf: &str) -> Option<Value> {
    let mut map = payload;
    for segment in prefix {
        map = match map.get_mut(segment) {
            Some(Value::Map(next)) => next,
            _ => return None,
        };
    }

    map.remove(leaf)
}

/// Drop payload map entries the extraction emptied, deepest first, so
/// an emptied child also empties (and removes) its parent.
pub(crate) fn prune_empty_path(payload: &mut Payload, prefix: &[String]) {
    for depth in (1..=prefix.len()).rev() {
        let empty = {
            let mut map: &Payload = payload;
            let mut resolved = true;
            for segment in &prefix[..depth] {
                match map.get(segment) {
                    Some(Value::Map(next)) => map = next,
                    _ => {
                        resolved = false;
                        break;
                    }
                }
            }
            resolved && map.is_empty()
        };

        if !empty {
            continue;
        }

        remove_at_path(payload, &prefix[..depth - 1], &prefix[depth - 1]);
    }
}

/// Descend `map` along `path` and remove `key` from the map found there.
/// Does nothing if any segment of `path` is missing or not a map.
fn remove_at_path(map: &mut Payload, path: &[String], key: &str) {
    match path.split_first() {
        None => {
            map.remove(key);
        }
        Some((segment, rest)) => {
            if let Some(Value::Map(next)) = map.get_mut(segment) {
                remove_at_path(next, rest, key);
            }
        }
    }
}
