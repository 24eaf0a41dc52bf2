//! # Error Taxonomy
//!
//! Each area has its own error enum (`RosterError`, `AssignmentError`, ...). All of
//! them classify into one [`ErrorKind`], which is what a presentation layer needs
//! in order to pick between an inline message, a terminal "not found" or "access
//! denied" view, and a generic "try again" banner.
//!
//! [`CafeError`] wraps every area error for callers, like the demo binary, that
//! drive several areas in one flow.

use crate::assignment::AssignmentError;
use crate::identity::IdentityError;
use crate::lifecycle::ConfigError;
use crate::order_session::OrderError;
use crate::play::PlayError;
use crate::profile::ProfileError;
use crate::roster::RosterError;
use crate::submission::SubmissionError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input; re-prompt, nothing was written.
    Validation,
    /// The caller does not own the resource.
    Permission,
    /// Classroom, assignment, code or document is missing.
    NotFound,
    /// The action clashes with existing state; nothing was written.
    Conflict,
    /// The storage collaborator failed or timed out. The user may retry.
    Storage,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        self == ErrorKind::Storage
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Permission => "permission",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Storage => "storage",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CafeError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CafeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CafeError::Order(e) => e.kind(),
            CafeError::Play(e) => e.kind(),
            CafeError::Assignment(e) => e.kind(),
            CafeError::Submission(e) => e.kind(),
            CafeError::Roster(e) => e.kind(),
            CafeError::Profile(e) => e.kind(),
            CafeError::Identity(e) => e.kind(),
            CafeError::Config(_) => ErrorKind::Validation,
        }
    }
}
