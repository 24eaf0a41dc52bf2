//! Error types for the classroom roster.

use crate::error::ErrorKind;
use cafe_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    #[error("Please enter a classroom name.")]
    EmptyName,

    #[error("You can have at most {0} classrooms.")]
    QuotaExceeded(usize),

    #[error("Could not find a free classroom code. Please try again.")]
    CodesExhausted,

    #[error("Enter a classroom code.")]
    EmptyCode,

    #[error("Invalid code. Please check with your teacher.")]
    InvalidCode,

    #[error("You've already joined this classroom.")]
    AlreadyJoined,

    #[error("Classroom not found")]
    ClassroomNotFound,

    #[error("You don't have permission to view this classroom")]
    Permission,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::EmptyName | RosterError::EmptyCode => ErrorKind::Validation,
            RosterError::QuotaExceeded(_)
            | RosterError::CodesExhausted
            | RosterError::AlreadyJoined => ErrorKind::Conflict,
            RosterError::InvalidCode | RosterError::ClassroomNotFound => ErrorKind::NotFound,
            RosterError::Permission => ErrorKind::Permission,
            RosterError::Storage(_) => ErrorKind::Storage,
        }
    }
}
