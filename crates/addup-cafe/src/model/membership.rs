use super::{ClassroomId, JoinCode, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Student,
}

/// A student's enrollment, stored under the classroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
    pub join_code: JoinCode,
    pub student_id: UserId,
    /// Display name captured at join time.
    pub name: String,
}

/// Mirror of a [`Membership`] stored under the student, for "my classes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedClassroom {
    pub classroom_id: ClassroomId,
    pub joined_at: DateTime<Utc>,
    pub join_code: JoinCode,
}
