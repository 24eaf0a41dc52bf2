use crate::assignment::AssignmentError;
use crate::error::ErrorKind;
use crate::order_session::OrderError;
use crate::submission::SubmissionError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlayError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),
}

impl PlayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayError::Order(e) => e.kind(),
            PlayError::Assignment(e) => e.kind(),
            PlayError::Submission(e) => e.kind(),
            PlayError::RestaurantNotFound(_) => ErrorKind::NotFound,
        }
    }
}
