//! Error types for the assignment registry.

use crate::error::ErrorKind;
use crate::model::SlotId;
use cafe_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssignmentError {
    #[error("{0} already has an active assignment. Delete it first.")]
    SlotOccupied(SlotId),

    #[error("Unknown restaurant: {0}")]
    InvalidRestaurant(String),

    #[error("Assignment not found.")]
    NotFound,

    #[error("Classroom not found")]
    ClassroomNotFound,

    #[error("You don't have permission to view this classroom")]
    Permission,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AssignmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssignmentError::SlotOccupied(_) => ErrorKind::Conflict,
            AssignmentError::InvalidRestaurant(_) => ErrorKind::Validation,
            AssignmentError::NotFound | AssignmentError::ClassroomNotFound => ErrorKind::NotFound,
            AssignmentError::Permission => ErrorKind::Permission,
            AssignmentError::Storage(_) => ErrorKind::Storage,
        }
    }
}
