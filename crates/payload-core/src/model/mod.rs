pub mod field;
pub mod record;
pub mod schema;

#[cfg(test)]
mod tests;

pub use field::{Field, FieldCard, FieldModel, ScalarKind};
pub use record::{RecordBuilder, RecordModel};
pub use schema::{Schema, SchemaBuilder, SchemaError};
