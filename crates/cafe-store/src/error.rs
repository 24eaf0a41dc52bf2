use std::time::Duration;

/// Errors raised by the store itself, independent of any document kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
    #[error("Document already exists: {0}")]
    AlreadyExists(String),
    #[error("Document rejected at {path}: {reason}")]
    Rejected { path: String, reason: String },
    #[error("Storage backend failure: {0}")]
    Backend(String),
}
