//! # Submission Tracker
//!
//! One [`Submission`](crate::model::Submission) per (classroom, slot, student),
//! materialized by an explicit get-or-create and updated by read-modify-write on
//! every answer. Concurrent answers from the same student are not reconciled:
//! the last write wins.
//!
//! The operations themselves live on [`SubmissionClient`](crate::clients::SubmissionClient).

pub mod entity;
pub mod error;

pub use error::*;
