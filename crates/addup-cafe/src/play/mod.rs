//! # Play Session
//!
//! An [`OrderSession`] in one of two modes:
//!
//! * **practice**: any known restaurant, nothing is stored;
//! * **assignment**: bound to a `(classroom, slot)` for the signed-in student.
//!   Opening it materializes the student's submission, a correct check records
//!   a correct answer, and quit-and-reveal records an incorrect one.
//!
//! The phase change happens first. If storing the outcome then fails the
//! student still sees the result, and the report says the answer was not saved.

pub mod error;

pub use error::PlayError;

use crate::assignment::AssignmentError;
use crate::clients::{AssignmentClient, SubmissionClient};
use crate::identity::Identity;
use crate::menu::{self, Money};
use crate::model::{ClassroomId, SlotId, SlotKey, Submission, SubmissionKey};
use crate::order_session::{OrderSession, Verdict};
use crate::submission::SubmissionError;
use cafe_store::StoreBacked;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Whether an outcome made it into the student's submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Recording {
    /// Practice mode, or an incorrect check.
    NotRecorded,
    Saved(Submission),
    /// Storage failed; the user may retry from a fresh attempt.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReport {
    pub verdict: Verdict,
    pub recording: Recording,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealReport {
    pub total: Money,
    pub recording: Recording,
}

struct Binding {
    key: SubmissionKey,
    submissions: SubmissionClient,
}

pub struct PlaySession {
    order: OrderSession,
    binding: Option<Binding>,
}

impl PlaySession {
    pub fn practice(restaurant_key: &str) -> Result<Self, PlayError> {
        let menu = menu::restaurant(restaurant_key)
            .ok_or_else(|| PlayError::RestaurantNotFound(restaurant_key.to_string()))?;
        Ok(Self {
            order: OrderSession::new(menu),
            binding: None,
        })
    }

    /// Opens the student's attempt at an assignment, creating the submission on
    /// first visit. The slot has to exist and be active.
    #[instrument(skip(student, assignments, submissions), fields(uid = %student.uid))]
    pub async fn open_assignment(
        student: &Identity,
        classroom: &ClassroomId,
        slot: SlotId,
        assignments: &AssignmentClient,
        submissions: &SubmissionClient,
    ) -> Result<Self, PlayError> {
        let slot_key = SlotKey::new(classroom.clone(), slot);
        let assignment = assignments
            .fetch(slot_key.clone())
            .await?
            .ok_or(AssignmentError::NotFound)?;
        if !assignment.is_active {
            return Err(SubmissionError::AssignmentInactive.into());
        }

        let menu = menu::restaurant(&assignment.restaurant_key)
            .ok_or_else(|| PlayError::RestaurantNotFound(assignment.restaurant_key.clone()))?;

        let key = slot_key.submission(student.uid.clone());
        let submission = submissions.ensure(key.clone()).await?;
        info!(
            restaurant = menu.key,
            answered = submission.questions_answered,
            "Assignment opened"
        );

        Ok(Self {
            order: OrderSession::new(menu),
            binding: Some(Binding {
                key,
                submissions: submissions.clone(),
            }),
        })
    }

    pub fn order(&self) -> &OrderSession {
        &self.order
    }

    /// Direct access for the menu and answer phases, which never touch storage.
    pub fn order_mut(&mut self) -> &mut OrderSession {
        &mut self.order
    }

    pub fn submission_key(&self) -> Option<&SubmissionKey> {
        self.binding.as_ref().map(|binding| &binding.key)
    }

    pub fn is_assignment(&self) -> bool {
        self.binding.is_some()
    }

    /// Shows the menu one item at a time, pausing `interval` between items.
    pub async fn reveal_menu(&mut self, interval: Duration) {
        while self.order.reveal_next() {
            tokio::time::sleep(interval).await;
        }
    }

    /// Checks the typed answer. Only a correct answer is recorded; a wrong one
    /// leaves the submission alone so the student can retry.
    pub async fn check_answer(&mut self) -> Result<AnswerReport, PlayError> {
        let verdict = self.order.check_answer()?;
        let recording = match verdict {
            Verdict::Correct => self.record(true).await,
            Verdict::Incorrect => Recording::NotRecorded,
        };
        Ok(AnswerReport { verdict, recording })
    }

    /// Gives up on the current order: the total is revealed and, in assignment
    /// mode, counted as an incorrect answer.
    pub async fn quit_and_reveal(&mut self) -> Result<RevealReport, PlayError> {
        let total = self.order.quit_and_reveal()?;
        let recording = self.record(false).await;
        Ok(RevealReport { total, recording })
    }

    async fn record(&self, correct: bool) -> Recording {
        let Some(binding) = &self.binding else {
            return Recording::NotRecorded;
        };
        match binding.submissions.record_answer(binding.key.clone(), correct).await {
            Ok(submission) => Recording::Saved(submission),
            Err(e) => {
                warn!(student = %binding.key.student, error = %e, "Answer not saved");
                Recording::Failed(e.to_string())
            }
        }
    }
}
