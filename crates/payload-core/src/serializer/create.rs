use crate::{
    error::{Error, ValidationError, ValidationIssue},
    serializer::Serializer,
    store::{Record, RecordStore},
    types::RecordId,
    value::{Payload, Value},
};
use tracing::debug;

impl Serializer<'_> {
    /// Create a record from a validated payload.
    ///
    /// Scalar fields go into the store's create operation; plural
    /// fields (nested-many and many-relation) are attached afterwards,
    /// then the record is persisted again.
    pub fn create(&self, store: &mut dyn RecordStore, payload: Payload) -> Result<Record, Error> {
        let mut scalars = Payload::new();
        let mut plural: Vec<(String, Vec<RecordId>)> = Vec::new();
        let mut issues: Vec<ValidationIssue> = Vec::new();

        for (name, value) in payload {
            let is_plural = self
                .model()
                .field(&name)
                .is_some_and(|f| f.card.is_plural());

            if is_plural {
                match value.ref_ids() {
                    Some(ids) => plural.push((name, ids)),
                    None => issues.push(ValidationIssue::new(
                        name.as_str(),
                        "expected related record references",
                    )),
                }
            } else {
                scalars.insert(name, value);
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError::new(issues).into());
        }

        let mut record = store.create(self.model().name.as_str(), scalars)?;
        debug!(
            record_type = self.model().name.as_str(),
            id = %record.id(),
            plural = plural.len(),
            "record created"
        );

        for (name, ids) in plural {
            store.relate(self.model().name.as_str(), record.id(), &name, &ids)?;
            record.set(name, Value::List(ids.into_iter().map(Value::Ref).collect()));
        }

        store.save(&record)?;

        Ok(record)
    }
}
