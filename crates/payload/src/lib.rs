//! Bulk-aware record serialization over a pluggable record store.
//!
//! ## Crate layout
//! - `core`: value vocabulary, schema model, store contract, and the
//!   serializer runtime.
//!
//! The `prelude` module mirrors the surface a caller needs to declare
//! a schema, validate inbound payloads, and apply them to records.

pub use payload_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use payload_core::error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use payload_core::prelude::*;
}
