use crate::{
    MAX_FIELD_NAME_LEN, MAX_RECORD_NAME_LEN, MAX_SOURCE_DEPTH,
    model::{
        field::{FieldCard, FieldModel, ScalarKind},
        record::{RecordBuilder, RecordModel},
    },
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Build-time schema assembly failures. These never surface at request
/// time; a built `Schema` is internally consistent.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error("duplicate field '{field}' on record type '{record}'")]
    DuplicateField { record: String, field: String },

    #[error("duplicate record type '{record}'")]
    DuplicateRecord { record: String },

    #[error("empty source segment on field '{field}' of record type '{record}'")]
    EmptySourceSegment { record: String, field: String },

    #[error("identifier field '{field}' on record type '{record}' must be an unsigned scalar")]
    IdFieldNotUint { record: String, field: String },

    #[error("identifier '{name}' exceeds the maximum length")]
    NameTooLong { name: String },

    #[error("source path on field '{field}' of record type '{record}' exceeds {MAX_SOURCE_DEPTH} segments")]
    SourceDepthExceeded { record: String, field: String },

    #[error(
        "source path on field '{field}' of record type '{record}' must end in the field name, found '{segment}'"
    )]
    SourceLeafMismatch {
        record: String,
        field: String,
        segment: String,
    },

    #[error(
        "source segment '{segment}' on field '{field}' of record type '{record}' is not a nested-single field"
    )]
    SourceNotNested {
        record: String,
        field: String,
        segment: String,
    },

    #[error("unknown record type '{record}'")]
    UnknownRecordType { record: String },

    #[error("source segment '{segment}' on field '{field}' of record type '{record}' does not exist")]
    UnknownSourceField {
        record: String,
        field: String,
        segment: String,
    },
}

///
/// Schema
///
/// Registry of resolved record models. Capabilities and source paths
/// are fixed here, once, so request-time code never re-derives them.
///

#[derive(Clone, Debug, Default)]
pub struct Schema {
    records: BTreeMap<String, RecordModel>,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn record(&self, name: &str) -> Result<&RecordModel, SchemaError> {
        self.records
            .get(name)
            .ok_or_else(|| SchemaError::UnknownRecordType {
                record: name.to_string(),
            })
    }

    pub fn record_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    // Cross-record validation: nested targets resolve, dotted sources
    // traverse nested-single fields, the leaf exists on the final model.
    fn validate(&self) -> Result<(), SchemaError> {
        for model in self.records.values() {
            for field in &model.fields {
                if let Some(target) = field.card.target() {
                    if !self.records.contains_key(target) {
                        return Err(SchemaError::UnknownRecordType {
                            record: target.to_string(),
                        });
                    }
                }

                if field.is_direct() {
                    continue;
                }

                let mut cursor = model;
                for segment in field.prefix() {
                    let seg_field = cursor.field(segment).ok_or_else(|| {
                        SchemaError::UnknownSourceField {
                            record: cursor.name.clone(),
                            field: field.name.clone(),
                            segment: segment.clone(),
                        }
                    })?;

                    let FieldCard::NestedSingle { target } = &seg_field.card else {
                        return Err(SchemaError::SourceNotNested {
                            record: cursor.name.clone(),
                            field: field.name.clone(),
                            segment: segment.clone(),
                        });
                    };

                    cursor = self
                        .records
                        .get(target)
                        .ok_or_else(|| SchemaError::UnknownRecordType {
                            record: target.clone(),
                        })?;
                }

                if cursor.field(&field.name).is_none() {
                    return Err(SchemaError::UnknownSourceField {
                        record: cursor.name.clone(),
                        field: field.name.clone(),
                        segment: field.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

///
/// SchemaBuilder
///

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    records: Vec<RecordBuilder>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.records.push(record);
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut records = BTreeMap::new();

        for builder in self.records {
            if builder.name.len() > MAX_RECORD_NAME_LEN {
                return Err(SchemaError::NameTooLong { name: builder.name });
            }

            let model = resolve_record(builder)?;
            let name = model.name.clone();
            if records.insert(name.clone(), model).is_some() {
                return Err(SchemaError::DuplicateRecord { record: name });
            }
        }

        let schema = Schema { records };
        schema.validate()?;

        Ok(schema)
    }
}

// Resolve one record declaration: parse sources, check per-record
// invariants, and guarantee the identifier field.
fn resolve_record(builder: RecordBuilder) -> Result<RecordModel, SchemaError> {
    let mut fields: Vec<FieldModel> = Vec::new();

    for field in builder.fields {
        if field.name.len() > MAX_FIELD_NAME_LEN {
            return Err(SchemaError::NameTooLong { name: field.name });
        }
        if fields.iter().any(|f| f.name == field.name) {
            return Err(SchemaError::DuplicateField {
                record: builder.name,
                field: field.name,
            });
        }

        let source_str = field.source.unwrap_or_else(|| field.name.clone());
        let segments: Vec<String> = source_str.split('.').map(str::to_string).collect();

        if segments.iter().any(String::is_empty) {
            return Err(SchemaError::EmptySourceSegment {
                record: builder.name,
                field: field.name,
            });
        }
        if segments.len() > MAX_SOURCE_DEPTH {
            return Err(SchemaError::SourceDepthExceeded {
                record: builder.name,
                field: field.name,
            });
        }
        if segments.last().map(String::as_str) != Some(field.name.as_str()) {
            return Err(SchemaError::SourceLeafMismatch {
                record: builder.name,
                segment: segments.last().cloned().unwrap_or_default(),
                field: field.name,
            });
        }

        fields.push(FieldModel {
            name: field.name,
            source: segments,
            card: field.card,
            required: field.required,
        });
    }

    match fields.iter().find(|f| f.name == builder.id_field) {
        Some(id) => {
            if id.card != FieldCard::Scalar(ScalarKind::Uint) {
                return Err(SchemaError::IdFieldNotUint {
                    record: builder.name,
                    field: builder.id_field,
                });
            }
        }
        None => {
            fields.insert(
                0,
                FieldModel {
                    name: builder.id_field.clone(),
                    source: vec![builder.id_field.clone()],
                    card: FieldCard::Scalar(ScalarKind::Uint),
                    required: false,
                },
            );
        }
    }

    Ok(RecordModel {
        name: builder.name,
        id_field: builder.id_field,
        fields,
    })
}
