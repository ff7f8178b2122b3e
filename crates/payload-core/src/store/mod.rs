mod error;
mod memory;

#[cfg(test)]
mod tests;

use crate::{
    types::RecordId,
    value::{Payload, Value},
};

// re-exports
pub use error::StoreError;
pub use memory::{MemoryStore, StoreEvent};

///
/// Record
///
/// One persisted entity: record-type name, store-assigned identity, and
/// the field map. Mutated via `set`, persisted via `RecordStore::save`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    kind: String,
    id: RecordId,
    fields: Payload,
}

impl Record {
    #[must_use]
    pub fn new(kind: impl Into<String>, id: RecordId, fields: Payload) -> Self {
        Self {
            kind: kind.into(),
            id,
            fields,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    #[must_use]
    pub const fn fields(&self) -> &Payload {
        &self.fields
    }
}

///
/// Filter
///
/// The three query shapes the serializer issues.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    All,
    Eq { field: String, value: Value },
    IdIn(Vec<RecordId>),
}

impl Filter {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Eq {
            field: field.into(),
            value,
        }
    }

    #[must_use]
    pub fn id_in(ids: impl IntoIterator<Item = RecordId>) -> Self {
        Self::IdIn(ids.into_iter().collect())
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Eq { field, value } => record.get(field) == Some(value),
            Self::IdIn(ids) => ids.contains(&record.id()),
        }
    }
}

///
/// RecordStore
///
/// The persistence collaborator contract. `query` yields records in the
/// store's own iteration order; callers must not assume input order.
/// `get` on a missing identifier is the lookup failure of the error
/// taxonomy and passes through the serializer unmodified.
///

pub trait RecordStore {
    fn query(&self, kind: &str, filter: &Filter) -> Result<Vec<Record>, StoreError>;

    fn get(&self, kind: &str, id: RecordId) -> Result<Record, StoreError>;

    fn create(&mut self, kind: &str, fields: Payload) -> Result<Record, StoreError>;

    fn save(&mut self, record: &Record) -> Result<(), StoreError>;

    /// Replace the related set behind a plural field.
    fn relate(
        &mut self,
        kind: &str,
        id: RecordId,
        field: &str,
        ids: &[RecordId],
    ) -> Result<(), StoreError>;
}
