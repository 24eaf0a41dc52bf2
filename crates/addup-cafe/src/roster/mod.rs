//! # Classroom Roster
//!
//! Classrooms, their join codes and their student memberships.
//!
//! ## Enrollment protocol
//!
//! 1. The teacher creates a classroom. A random code is reserved in the global
//!    `classroomCodes` index with an exists-guarded create, then the classroom
//!    record is written. A failed classroom write releases the code again.
//! 2. A student enters the code. It is trimmed and upper-cased, looked up in the
//!    index, and checked against the student's own `joinedClassrooms` entries.
//! 3. The membership is written under the classroom, then mirrored under the
//!    student with the same `joinedAt`. The two writes are not linked; a failure
//!    between them leaves a membership without its mirror.
//!
//! Teacher-side operations check ownership first and fail with
//! [`RosterError::Permission`] for anyone else's classroom.
//!
//! Operations live on [`RosterClient`](crate::clients::RosterClient).

pub mod code;
pub mod entity;
pub mod error;

pub use code::{generate_code, CODE_ALPHABET};
pub use error::*;

use crate::assignment::AssignmentError;
use crate::identity::Identity;
use crate::model::{
    AssignmentSlot, Classroom, ClassroomId, JoinedClassroom, SlotId, Submission,
};
use cafe_store::{StoreClient, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterPolicy {
    pub classroom_quota: usize,
    pub code_length: usize,
    pub code_attempts: usize,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            classroom_quota: 5,
            code_length: 6,
            code_attempts: 10,
        }
    }
}

/// A classroom as one student sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentClassroom {
    pub classroom: Classroom,
    pub joined: JoinedClassroom,
    /// Active assignments only, slot order.
    pub assignments: Vec<StudentAssignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentAssignment {
    pub slot: SlotId,
    pub assignment: AssignmentSlot,
    /// `None` until the student first opens the assignment.
    pub submission: Option<Submission>,
}

/// Why a teacher may not act on a classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    Missing,
    NotOwner,
}

impl From<AccessDenied> for RosterError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Missing => RosterError::ClassroomNotFound,
            AccessDenied::NotOwner => RosterError::Permission,
        }
    }
}

impl From<AccessDenied> for AssignmentError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Missing => AssignmentError::ClassroomNotFound,
            AccessDenied::NotOwner => AssignmentError::Permission,
        }
    }
}

/// Loads a classroom on behalf of its teacher.
pub(crate) async fn owned_classroom<E>(
    classrooms: &StoreClient<Classroom>,
    teacher: &Identity,
    id: &ClassroomId,
) -> Result<Classroom, E>
where
    E: From<StoreError> + From<AccessDenied>,
{
    let classroom = classrooms
        .get(id.clone())
        .await?
        .ok_or(AccessDenied::Missing)?;
    if classroom.teacher_id != teacher.uid {
        tracing::warn!(classroom = %id, uid = %teacher.uid, "Classroom access denied");
        return Err(AccessDenied::NotOwner.into());
    }
    Ok(classroom)
}
