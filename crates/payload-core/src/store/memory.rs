use crate::{
    store::{Filter, Record, RecordStore, StoreError},
    types::RecordId,
    value::{Payload, Value},
};
use std::{cell::RefCell, collections::BTreeMap};
use tracing::debug;

///
/// StoreEvent
///
/// Observable persistence events, in occurrence order. Lets tests and
/// diagnostics assert on write sequencing (create before relate before
/// save) without reaching into the tables.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    Created {
        kind: String,
        id: RecordId,
    },
    Queried {
        kind: String,
    },
    Related {
        kind: String,
        id: RecordId,
        field: String,
    },
    Saved {
        kind: String,
        id: RecordId,
    },
}

///
/// MemoryStore
///
/// In-process reference store. Iteration order is ascending record id;
/// ids are assigned monotonically from 1 per record type.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<String, BTreeMap<RecordId, Payload>>,
    next_ids: BTreeMap<String, u64>,
    journal: RefCell<Vec<StoreEvent>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record with a caller-chosen id, bypassing assignment.
    /// Bootstrap/test helper; does not journal.
    pub fn seed(&mut self, kind: impl Into<String>, id: RecordId, fields: Payload) {
        let kind = kind.into();
        let next = self.next_ids.entry(kind.clone()).or_insert(1);
        *next = (*next).max(id.get() + 1);
        self.tables.entry(kind).or_default().insert(id, fields);
    }

    #[must_use]
    pub fn journal(&self) -> Vec<StoreEvent> {
        self.journal.borrow().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }

    /// Number of persisted records of one type.
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.tables.get(kind).map_or(0, BTreeMap::len)
    }

    fn record_event(&self, event: StoreEvent) {
        self.journal.borrow_mut().push(event);
    }
}

impl RecordStore for MemoryStore {
    fn query(&self, kind: &str, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        let records = self.tables.get(kind).map_or_else(Vec::new, |table| {
            table
                .iter()
                .map(|(id, fields)| Record::new(kind, *id, fields.clone()))
                .filter(|record| filter.matches(record))
                .collect()
        });

        debug!(kind, returned = records.len(), "store query");
        self.record_event(StoreEvent::Queried {
            kind: kind.to_string(),
        });

        Ok(records)
    }

    fn get(&self, kind: &str, id: RecordId) -> Result<Record, StoreError> {
        self.tables
            .get(kind)
            .and_then(|table| table.get(&id))
            .map(|fields| Record::new(kind, id, fields.clone()))
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    fn create(&mut self, kind: &str, fields: Payload) -> Result<Record, StoreError> {
        let next = self.next_ids.entry(kind.to_string()).or_insert(1);
        let id = RecordId::new(*next);
        *next += 1;

        self.tables
            .entry(kind.to_string())
            .or_default()
            .insert(id, fields.clone());

        debug!(kind, %id, "record created");
        self.record_event(StoreEvent::Created {
            kind: kind.to_string(),
            id,
        });

        Ok(Record::new(kind, id, fields))
    }

    fn save(&mut self, record: &Record) -> Result<(), StoreError> {
        self.tables
            .entry(record.kind().to_string())
            .or_default()
            .insert(record.id(), record.fields().clone());

        debug!(kind = record.kind(), id = %record.id(), "record saved");
        self.record_event(StoreEvent::Saved {
            kind: record.kind().to_string(),
            id: record.id(),
        });

        Ok(())
    }

    fn relate(
        &mut self,
        kind: &str,
        id: RecordId,
        field: &str,
        ids: &[RecordId],
    ) -> Result<(), StoreError> {
        let stored = self
            .tables
            .get_mut(kind)
            .and_then(|table| table.get_mut(&id))
            .ok_or_else(|| StoreError::not_found(kind, id))?;

        stored.insert(
            field.to_string(),
            Value::List(ids.iter().copied().map(Value::Ref).collect()),
        );

        debug!(kind, %id, field, related = ids.len(), "relation replaced");
        self.record_event(StoreEvent::Related {
            kind: kind.to_string(),
            id,
            field: field.to_string(),
        });

        Ok(())
    }
}
