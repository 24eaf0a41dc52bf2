use crate::assignment::SlotPair;
use crate::identity::Identity;
use crate::lifecycle::Stores;
use crate::model::{
    AssignmentSlot, Classroom, ClassroomId, Membership, SlotId, SlotKey, Submission,
    SubmissionStatus, UserId,
};
use crate::roster::{owned_classroom, RosterError};
use cafe_store::StoreClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, instrument, warn};

/// One cell of the teacher's progress table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotProgress {
    /// No assignment in this slot.
    SlotInactive,
    /// Assignment exists, the student has not opened it yet.
    NotStarted,
    Progress {
        correct: u32,
        answered: u32,
        status: SubmissionStatus,
    },
    /// The slot's submissions could not be read this time round.
    Unavailable,
}

impl From<&Submission> for SlotProgress {
    fn from(submission: &Submission) -> Self {
        SlotProgress::Progress {
            correct: submission.correct_count,
            answered: submission.questions_answered,
            status: submission.status,
        }
    }
}

impl fmt::Display for SlotProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotProgress::SlotInactive => f.write_str("-"),
            SlotProgress::NotStarted => f.write_str("not started"),
            SlotProgress::Progress {
                correct, answered, ..
            } => write!(f, "{correct}/{answered}"),
            SlotProgress::Unavailable => f.write_str("?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub student_id: UserId,
    pub name: String,
    pub slot1: SlotProgress,
    pub slot2: SlotProgress,
}

impl StudentRow {
    pub fn cell(&self, slot: SlotId) -> SlotProgress {
        match slot {
            SlotId::Slot1 => self.slot1,
            SlotId::Slot2 => self.slot2,
        }
    }

    fn cell_mut(&mut self, slot: SlotId) -> &mut SlotProgress {
        match slot {
            SlotId::Slot1 => &mut self.slot1,
            SlotId::Slot2 => &mut self.slot2,
        }
    }
}

/// Everything the teacher's classroom page shows, read in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomSnapshot {
    pub classroom: Classroom,
    pub slots: SlotPair,
    /// Membership order.
    pub rows: Vec<StudentRow>,
    pub taken_at: DateTime<Utc>,
}

impl ClassroomSnapshot {
    pub fn row(&self, student: &UserId) -> Option<&StudentRow> {
        self.rows.iter().find(|row| &row.student_id == student)
    }

    // Local edits applied right after a mutation; the next poll overwrites them.

    pub fn remove_student(&mut self, student: &UserId) {
        self.rows.retain(|row| &row.student_id != student);
    }

    pub fn clear_slot(&mut self, slot: SlotId) {
        self.slots.set(slot, None);
        for row in &mut self.rows {
            *row.cell_mut(slot) = SlotProgress::SlotInactive;
        }
    }

    pub fn assign_slot(&mut self, slot: SlotId, assignment: AssignmentSlot) {
        self.slots.set(slot, Some(assignment));
        for row in &mut self.rows {
            *row.cell_mut(slot) = SlotProgress::NotStarted;
        }
    }
}

/// What was learned about one slot's submissions.
enum SlotSubmissions {
    Absent,
    Loaded(HashMap<UserId, Submission>),
    Unreadable,
}

impl SlotSubmissions {
    fn cell(&self, student: &UserId) -> SlotProgress {
        match self {
            SlotSubmissions::Absent => SlotProgress::SlotInactive,
            SlotSubmissions::Unreadable => SlotProgress::Unavailable,
            SlotSubmissions::Loaded(by_student) => by_student
                .get(student)
                .map(SlotProgress::from)
                .unwrap_or(SlotProgress::NotStarted),
        }
    }
}

/// Read-only projection of roster, slots and submissions for one classroom.
#[derive(Clone)]
pub struct ProgressView {
    classrooms: StoreClient<Classroom>,
    members: StoreClient<Membership>,
    slots: StoreClient<AssignmentSlot>,
    submissions: StoreClient<Submission>,
}

impl ProgressView {
    pub fn new(stores: &Stores) -> Self {
        Self {
            classrooms: stores.classrooms.clone(),
            members: stores.members.clone(),
            slots: stores.slots.clone(),
            submissions: stores.submissions.clone(),
        }
    }

    /// Builds the table. The classroom, member and slot reads are required; a
    /// failed submission read only blanks that slot's column.
    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn snapshot(
        &self,
        teacher: &Identity,
        classroom: &ClassroomId,
    ) -> Result<ClassroomSnapshot, RosterError> {
        let record = owned_classroom::<RosterError>(&self.classrooms, teacher, classroom).await?;
        let members = self.members.list(classroom.clone()).await?;
        let slots = SlotPair::from_docs(self.slots.list(classroom.clone()).await?);

        let mut columns = Vec::with_capacity(SlotId::ALL.len());
        for slot in SlotId::ALL {
            columns.push(self.slot_submissions(&slots, classroom, slot).await);
        }
        let (slot1, slot2) = (&columns[0], &columns[1]);

        let rows = members
            .into_iter()
            .map(|(key, member)| StudentRow {
                slot1: slot1.cell(&key.student),
                slot2: slot2.cell(&key.student),
                student_id: key.student,
                name: member.name,
            })
            .collect::<Vec<_>>();

        debug!(rows = rows.len(), "Snapshot built");
        Ok(ClassroomSnapshot {
            classroom: record,
            slots,
            rows,
            taken_at: Utc::now(),
        })
    }

    async fn slot_submissions(
        &self,
        slots: &SlotPair,
        classroom: &ClassroomId,
        slot: SlotId,
    ) -> SlotSubmissions {
        if slots.get(slot).is_none() {
            return SlotSubmissions::Absent;
        }
        match self.submissions.list(SlotKey::new(classroom.clone(), slot)).await {
            Ok(children) => SlotSubmissions::Loaded(
                children
                    .into_iter()
                    .map(|(key, submission)| (key.student, submission))
                    .collect(),
            ),
            Err(e) => {
                warn!(%slot, error = %e, "Submissions unavailable for slot");
                SlotSubmissions::Unreadable
            }
        }
    }
}
