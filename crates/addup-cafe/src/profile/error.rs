use crate::error::ErrorKind;
use cafe_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("Please enter your name.")]
    EmptyName,

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ProfileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::EmptyName => ErrorKind::Validation,
            ProfileError::NotFound(_) => ErrorKind::NotFound,
            ProfileError::Storage(_) => ErrorKind::Storage,
        }
    }
}
