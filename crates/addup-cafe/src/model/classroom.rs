use super::{ClassroomId, JoinCode, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teacher-owned group of students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub code: JoinCode,
    pub created_at: DateTime<Utc>,
    pub teacher_id: UserId,
}

/// Entry of the global `classroomCodes` index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeIndexEntry {
    pub classroom_id: ClassroomId,
    pub teacher_id: UserId,
}
