use super::Phase;
use crate::error::ErrorKind;
use thiserror::Error;

/// Rejections from the order phase machine. None of them change session state,
/// except that a bad answer also sets the feedback message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Cannot {action} while in the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("Add at least one item before placing the order")]
    EmptyOrder,

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Menu item not shown yet: {0}")]
    NotShown(String),

    #[error("Not a number: {0:?}")]
    InvalidAnswer(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
