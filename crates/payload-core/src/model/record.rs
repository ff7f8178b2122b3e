use crate::model::field::{Field, FieldModel};

/// Default identifier field name.
pub(crate) const DEFAULT_ID_FIELD: &str = "id";

///
/// RecordModel
///
/// Resolved runtime model for one record type: stable name, identifier
/// field, and the ordered field list.
///

#[derive(Clone, Debug)]
pub struct RecordModel {
    pub name: String,
    pub id_field: String,
    pub fields: Vec<FieldModel>,
}

impl RecordModel {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            name: name.into(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// RecordBuilder
///
/// Declaration of one record type, resolved and validated by
/// `SchemaBuilder::build`.
///

#[derive(Clone, Debug)]
pub struct RecordBuilder {
    pub(crate) name: String,
    pub(crate) id_field: String,
    pub(crate) fields: Vec<Field>,
}

impl RecordBuilder {
    /// Override the identifier field name (default `"id"`).
    #[must_use]
    pub fn id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = name.into();
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}
