//! # Submission Client
//!
//! Get-or-create and answer recording for per-student submissions, plus the
//! idempotent deletes that cascades rely on.

use crate::cascade::CascadeReport;
use crate::lifecycle::Stores;
use crate::model::{AssignmentSlot, SlotKey, Submission, SubmissionKey};
use crate::submission::SubmissionError;
use async_trait::async_trait;
use cafe_store::{Document, StoreBacked, StoreClient, StoreError};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct SubmissionClient {
    submissions: StoreClient<Submission>,
    slots: StoreClient<AssignmentSlot>,
}

#[async_trait]
impl StoreBacked<Submission> for SubmissionClient {
    type Error = SubmissionError;

    fn store(&self) -> &StoreClient<Submission> {
        &self.submissions
    }

    fn map_error(e: StoreError) -> Self::Error {
        SubmissionError::Storage(e)
    }
}

impl SubmissionClient {
    pub fn new(stores: &Stores) -> Self {
        Self {
            submissions: stores.submissions.clone(),
            slots: stores.slots.clone(),
        }
    }

    /// Returns the student's submission for an active slot, creating an empty one
    /// on first access. Calling it again never resets the counts.
    #[instrument(skip(self), fields(path = %Submission::path(&key)))]
    pub async fn ensure(&self, key: SubmissionKey) -> Result<Submission, SubmissionError> {
        let slot = self.slots.get(key.slot_key()).await?;
        if !slot.is_some_and(|slot| slot.is_active) {
            debug!("Slot absent or inactive");
            return Err(SubmissionError::AssignmentInactive);
        }

        if let Some(existing) = self.submissions.get(key.clone()).await? {
            return Ok(existing);
        }

        let fresh = Submission::started(key.student.clone(), Utc::now());
        match self.submissions.create(key.clone(), fresh.clone()).await {
            Ok(()) => {
                info!("Submission started");
                Ok(fresh)
            }
            // Another session of the same student got there first.
            Err(StoreError::AlreadyExists(_)) => self
                .submissions
                .get(key.clone())
                .await?
                .ok_or_else(|| SubmissionError::not_found(&key)),
            Err(e) => Err(e.into()),
        }
    }

    /// Counts one answered question. Read-modify-write, last write wins.
    #[instrument(skip(self), fields(path = %Submission::path(&key)))]
    pub async fn record_answer(
        &self,
        key: SubmissionKey,
        correct: bool,
    ) -> Result<Submission, SubmissionError> {
        let mut submission = self
            .submissions
            .get(key.clone())
            .await?
            .ok_or_else(|| SubmissionError::not_found(&key))?;

        submission.record(correct, Utc::now());
        self.submissions.put(key, submission.clone()).await?;

        info!(
            answered = submission.questions_answered,
            correct = submission.correct_count,
            "Answer recorded"
        );
        Ok(submission)
    }

    pub async fn list_for_slot(
        &self,
        slot: SlotKey,
    ) -> Result<Vec<(SubmissionKey, Submission)>, SubmissionError> {
        Ok(self.submissions.list(slot).await?)
    }

    /// Deletes every submission under `slot`. Per-document failures are logged
    /// and reported, never returned.
    #[instrument(skip(self), fields(path = %AssignmentSlot::path(&slot)))]
    pub async fn delete_all_for_slot(&self, slot: SlotKey) -> CascadeReport {
        let mut report = CascadeReport::new();
        let path = format!("{}/submissions", AssignmentSlot::path(&slot));

        let children = match self.submissions.list(slot).await {
            Ok(children) => children,
            Err(e) => {
                warn!(error = %e, "Could not list submissions for cleanup");
                report.step(path, Err::<(), _>(e));
                return report;
            }
        };

        for (key, _) in children {
            let path = Submission::path(&key);
            report.step(path, self.submissions.delete(key).await);
        }

        debug!(deleted = report.completed, failed = report.failed.len(), "Slot submissions swept");
        report
    }
}
