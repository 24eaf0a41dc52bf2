use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    InProgress,
    Submitted,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubmissionStatus::InProgress => "in_progress",
            SubmissionStatus::Submitted => "submitted",
        })
    }
}

/// One student's progress on one assignment slot.
///
/// `correct_count <= questions_answered` always holds; the store rejects writes
/// that would break it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub student_id: UserId,
    pub status: SubmissionStatus,
    pub questions_answered: u32,
    pub correct_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    pub fn started(student_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            student_id,
            status: SubmissionStatus::InProgress,
            questions_answered: 0,
            correct_count: 0,
            updated_at: now,
        }
    }

    /// Counts one answered question and marks the submission submitted.
    pub fn record(&mut self, correct: bool, now: DateTime<Utc>) {
        self.questions_answered += 1;
        if correct {
            self.correct_count += 1;
        }
        self.status = SubmissionStatus::Submitted;
        self.updated_at = now;
    }
}
