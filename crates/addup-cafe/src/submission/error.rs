//! Error types for the submission tracker.

use crate::error::ErrorKind;
use crate::model::SubmissionKey;
use cafe_store::{Document, StoreError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionError {
    /// The slot is absent or switched off; no submission may be opened.
    #[error("This assignment is not active.")]
    AssignmentInactive,

    #[error("Submission not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl SubmissionError {
    pub fn not_found(key: &SubmissionKey) -> Self {
        SubmissionError::NotFound(crate::model::Submission::path(key))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::AssignmentInactive => ErrorKind::Conflict,
            SubmissionError::NotFound(_) => ErrorKind::NotFound,
            SubmissionError::Storage(_) => ErrorKind::Storage,
        }
    }
}
