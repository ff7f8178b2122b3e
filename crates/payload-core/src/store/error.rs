use crate::types::RecordId;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failures originating in the persistence collaborator. The serializer
/// never catches or translates these.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum StoreError {
    #[error("store backend failure: {message}")]
    Backend { message: String },

    #[error("record '{kind}' with id {id} does not exist")]
    NotFound { kind: String, id: RecordId },
}

impl StoreError {
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(kind: impl Into<String>, id: RecordId) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id,
        }
    }
}
