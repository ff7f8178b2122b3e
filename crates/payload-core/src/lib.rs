//! Core runtime for Payload: the value vocabulary, schema model, store
//! contract, and the bulk-aware record serializer built on top of them.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod context;
pub mod error;
pub mod model;
pub mod serializer;
pub mod store;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Maximum length for record-type schema identifiers.
pub const MAX_RECORD_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum number of segments in a dotted field source.
///
/// Keeps the per-request path walk bounded; deeper paths are a schema
/// mistake, not a runtime condition.
pub const MAX_SOURCE_DEPTH: usize = 8;

///
/// Prelude
///
/// Prelude contains the serializer-facing vocabulary.
/// Internal helpers and per-module error detail types stay out.
///

pub mod prelude {
    pub use crate::{
        context::{HttpMethod, RequestContext},
        error::{Error, ValidationError, ValidationIssue},
        model::{Field, RecordModel, ScalarKind, Schema},
        serializer::{BulkUpdater, Serializer, SerializerOptions},
        store::{Filter, MemoryStore, Record, RecordStore},
        types::RecordId,
        value::{Payload, Value},
    };
}
