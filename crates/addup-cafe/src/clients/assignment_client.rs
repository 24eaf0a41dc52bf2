//! # Assignment Client
//!
//! Teacher-facing operations on the two assignment slots of a classroom.
use crate::assignment::{AssignmentError, SlotPair};
use crate::cascade::CascadeReport;
use crate::clients::SubmissionClient;
use crate::identity::Identity;
use crate::lifecycle::Stores;
use crate::menu;
use crate::model::{AssignmentSlot, Classroom, ClassroomId, SlotKey, SlotKind};
use crate::roster::owned_classroom;
use async_trait::async_trait;
use cafe_store::{Document, StoreBacked, StoreClient, StoreError};
use chrono::Utc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AssignmentClient {
    slots: StoreClient<AssignmentSlot>,
    classrooms: StoreClient<Classroom>,
    submissions: SubmissionClient,
}

#[async_trait]
impl StoreBacked<AssignmentSlot> for AssignmentClient {
    type Error = AssignmentError;

    fn store(&self) -> &StoreClient<AssignmentSlot> {
        &self.slots
    }

    fn map_error(e: StoreError) -> Self::Error {
        AssignmentError::Storage(e)
    }
}

impl AssignmentClient {
    pub fn new(stores: &Stores, submissions: SubmissionClient) -> Self {
        Self {
            slots: stores.slots.clone(),
            classrooms: stores.classrooms.clone(),
            submissions,
        }
    }

    /// Binds a slot to a restaurant. Fails if that slot is already active; the
    /// other slot is irrelevant.
    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn create(
        &self,
        teacher: &Identity,
        slot: SlotKey,
        restaurant_key: &str,
    ) -> Result<AssignmentSlot, AssignmentError> {
        owned_classroom::<AssignmentError>(&self.classrooms, teacher, &slot.classroom).await?;

        if let Some(existing) = self.slots.get(slot.clone()).await? {
            if existing.is_active {
                warn!(current = %existing.restaurant_key, "Slot occupied");
                return Err(AssignmentError::SlotOccupied(slot.slot));
            }
        }

        let menu = menu::assignable(restaurant_key)
            .ok_or_else(|| AssignmentError::InvalidRestaurant(restaurant_key.to_string()))?;

        let assignment = AssignmentSlot {
            kind: SlotKind::Assignment,
            restaurant_key: menu.key.to_string(),
            restaurant_name: menu.name.to_string(),
            created_at: Utc::now(),
            is_active: true,
        };
        self.slots.put(slot.clone(), assignment.clone()).await?;

        info!(path = %AssignmentSlot::path(&slot), restaurant = menu.key, "Assignment created");
        Ok(assignment)
    }

    /// Removes the slot and, best-effort, every submission under it. Afterwards
    /// the slot is absent, not merely inactive.
    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn delete(
        &self,
        teacher: &Identity,
        slot: SlotKey,
    ) -> Result<CascadeReport, AssignmentError> {
        owned_classroom::<AssignmentError>(&self.classrooms, teacher, &slot.classroom).await?;

        let report = self.submissions.delete_all_for_slot(slot.clone()).await;
        self.slots.delete(slot.clone()).await?;

        info!(
            path = %AssignmentSlot::path(&slot),
            submissions = report.completed,
            failed = report.failed.len(),
            "Assignment deleted"
        );
        Ok(report)
    }

    /// Both slots of a classroom; absent slots are `None`.
    pub async fn read(&self, classroom: &ClassroomId) -> Result<SlotPair, AssignmentError> {
        let docs = self.slots.list(classroom.clone()).await?;
        Ok(SlotPair::from_docs(docs))
    }

    /// Cascade variant of [`delete`](Self::delete) used when the whole classroom
    /// goes away: no ownership check, and the slot delete is just another step.
    pub(crate) async fn purge(&self, slot: SlotKey) -> CascadeReport {
        let mut report = self.submissions.delete_all_for_slot(slot.clone()).await;
        let path = AssignmentSlot::path(&slot);
        report.step(path, self.slots.delete(slot).await);
        report
    }
}
