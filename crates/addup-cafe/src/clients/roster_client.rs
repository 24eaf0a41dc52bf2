//! # Roster Client
//!
//! Classroom lifecycle for teachers and the join protocol for students.
use crate::assignment::SlotPair;
use crate::cascade::CascadeReport;
use crate::clients::{AssignmentClient, SubmissionClient};
use crate::identity::Identity;
use crate::lifecycle::Stores;
use crate::model::{
    AssignmentSlot, Classroom, ClassroomId, CodeIndexEntry, JoinCode, JoinedClassroom, JoinedKey,
    MemberKey, MemberRole, Membership, SlotId, SlotKey, Submission, UserId, UserProfile,
};
use crate::roster::{
    generate_code, owned_classroom, RosterError, RosterPolicy, StudentAssignment,
    StudentClassroom,
};
use async_trait::async_trait;
use cafe_store::{Document, StoreBacked, StoreClient, StoreError};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

const FALLBACK_STUDENT_NAME: &str = "Student";

#[derive(Clone)]
pub struct RosterClient {
    classrooms: StoreClient<Classroom>,
    codes: StoreClient<CodeIndexEntry>,
    members: StoreClient<Membership>,
    joined: StoreClient<JoinedClassroom>,
    slots: StoreClient<AssignmentSlot>,
    profiles: StoreClient<UserProfile>,
    assignments: AssignmentClient,
    submissions: SubmissionClient,
    policy: RosterPolicy,
}

#[async_trait]
impl StoreBacked<Classroom> for RosterClient {
    type Error = RosterError;

    fn store(&self) -> &StoreClient<Classroom> {
        &self.classrooms
    }

    fn map_error(e: StoreError) -> Self::Error {
        RosterError::Storage(e)
    }
}

impl RosterClient {
    pub fn new(
        stores: &Stores,
        assignments: AssignmentClient,
        submissions: SubmissionClient,
        policy: RosterPolicy,
    ) -> Self {
        Self {
            classrooms: stores.classrooms.clone(),
            codes: stores.codes.clone(),
            members: stores.members.clone(),
            joined: stores.joined.clone(),
            slots: stores.slots.clone(),
            profiles: stores.profiles.clone(),
            assignments,
            submissions,
            policy,
        }
    }

    pub fn policy(&self) -> RosterPolicy {
        self.policy
    }

    // =========================================================================
    // Teacher side
    // =========================================================================

    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn create_classroom(
        &self,
        teacher: &Identity,
        name: &str,
    ) -> Result<Classroom, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let owned = self.teacher_classrooms(teacher).await?;
        if owned.len() >= self.policy.classroom_quota {
            return Err(RosterError::QuotaExceeded(self.policy.classroom_quota));
        }

        let id = ClassroomId::generate();
        let code = self.reserve_code(teacher, &id, &owned).await?;

        let classroom = Classroom {
            id: id.clone(),
            name: name.to_string(),
            code: code.clone(),
            created_at: Utc::now(),
            teacher_id: teacher.uid.clone(),
        };
        if let Err(e) = self.classrooms.create(id.clone(), classroom.clone()).await {
            warn!(classroom = %id, %code, error = %e, "Classroom write failed, releasing code");
            if let Err(release) = self.codes.delete(code.clone()).await {
                warn!(%code, error = %release, "Code release failed, entry left orphaned");
            }
            return Err(e.into());
        }

        info!(classroom = %id, %code, "Classroom created");
        Ok(classroom)
    }

    /// Picks a code unused by this teacher and claims it in the global index.
    async fn reserve_code(
        &self,
        teacher: &Identity,
        classroom: &ClassroomId,
        owned: &[Classroom],
    ) -> Result<JoinCode, RosterError> {
        let taken: HashSet<&JoinCode> = owned.iter().map(|c| &c.code).collect();
        let entry = CodeIndexEntry {
            classroom_id: classroom.clone(),
            teacher_id: teacher.uid.clone(),
        };

        for attempt in 1..=self.policy.code_attempts {
            let code = generate_code(&mut rand::thread_rng(), self.policy.code_length);
            if taken.contains(&code) {
                debug!(attempt, %code, "Code already used by this teacher");
                continue;
            }
            match self.codes.create(code.clone(), entry.clone()).await {
                Ok(()) => return Ok(code),
                Err(StoreError::AlreadyExists(_)) => {
                    debug!(attempt, %code, "Code already claimed elsewhere");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(attempts = self.policy.code_attempts, "No free classroom code found");
        Err(RosterError::CodesExhausted)
    }

    /// The teacher's classrooms, newest first.
    pub async fn list_teacher_classrooms(
        &self,
        teacher: &Identity,
    ) -> Result<Vec<Classroom>, RosterError> {
        let mut owned = self.teacher_classrooms(teacher).await?;
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn teacher_classrooms(&self, teacher: &Identity) -> Result<Vec<Classroom>, RosterError> {
        Ok(self
            .classrooms
            .list(())
            .await?
            .into_iter()
            .map(|(_, classroom)| classroom)
            .filter(|classroom| classroom.teacher_id == teacher.uid)
            .collect())
    }

    /// Opens a classroom page: only its teacher gets through.
    pub async fn load_classroom(
        &self,
        teacher: &Identity,
        id: &ClassroomId,
    ) -> Result<Classroom, RosterError> {
        owned_classroom(&self.classrooms, teacher, id).await
    }

    /// Members in join order.
    pub async fn members(
        &self,
        teacher: &Identity,
        id: &ClassroomId,
    ) -> Result<Vec<Membership>, RosterError> {
        owned_classroom::<RosterError>(&self.classrooms, teacher, id).await?;
        Ok(self
            .members
            .list(id.clone())
            .await?
            .into_iter()
            .map(|(_, member)| member)
            .collect())
    }

    /// Unenrolls a student. Membership and its mirror must go; the student's
    /// submissions are removed best-effort.
    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn remove_student(
        &self,
        teacher: &Identity,
        classroom: &ClassroomId,
        student: &UserId,
    ) -> Result<CascadeReport, RosterError> {
        owned_classroom::<RosterError>(&self.classrooms, teacher, classroom).await?;

        let existed = self
            .members
            .delete(MemberKey {
                classroom: classroom.clone(),
                student: student.clone(),
            })
            .await?;
        if !existed {
            debug!(%student, "No membership to remove");
        }
        self.joined
            .delete(JoinedKey {
                student: student.clone(),
                classroom: classroom.clone(),
            })
            .await?;

        let mut report = CascadeReport::new();
        for slot in SlotId::ALL {
            let key = SlotKey::new(classroom.clone(), slot).submission(student.clone());
            let path = Submission::path(&key);
            report.step(path, self.submissions.remove(key).await);
        }

        info!(%classroom, %student, failed = report.failed.len(), "Student removed");
        Ok(report)
    }

    /// Deletes the classroom record, then sweeps what hung off it.
    ///
    /// Only the record delete can fail the call. The code index, memberships and
    /// their mirrors, slots and submissions are removed best-effort; whatever a
    /// failed step leaves behind stays orphaned.
    #[instrument(skip(self, teacher), fields(uid = %teacher.uid))]
    pub async fn delete_classroom(
        &self,
        teacher: &Identity,
        id: &ClassroomId,
    ) -> Result<CascadeReport, RosterError> {
        let classroom = owned_classroom::<RosterError>(&self.classrooms, teacher, id).await?;
        self.classrooms.delete(id.clone()).await?;

        let mut report = CascadeReport::new();
        report.step(
            CodeIndexEntry::path(&classroom.code),
            self.codes.delete(classroom.code.clone()).await,
        );

        match self.members.list(id.clone()).await {
            Ok(members) => {
                for (key, _) in members {
                    let mirror = JoinedKey {
                        student: key.student.clone(),
                        classroom: id.clone(),
                    };
                    report.step(JoinedClassroom::path(&mirror), self.joined.delete(mirror).await);
                    report.step(Membership::path(&key), self.members.delete(key).await);
                }
            }
            Err(e) => report.step(format!("classrooms/{id}/members"), Err::<(), _>(e)),
        }

        for slot in SlotId::ALL {
            report.merge(self.assignments.purge(SlotKey::new(id.clone(), slot)).await);
        }

        info!(
            classroom = %id,
            steps = report.completed,
            failed = report.failed.len(),
            "Classroom deleted"
        );
        Ok(report)
    }

    // =========================================================================
    // Student side
    // =========================================================================

    /// Enrolls the student behind `raw_code`.
    ///
    /// Rejections (empty code, unknown code, already joined) write nothing.
    #[instrument(skip(self, student), fields(uid = %student.uid))]
    pub async fn join_classroom(
        &self,
        student: &Identity,
        raw_code: &str,
    ) -> Result<Membership, RosterError> {
        let code = JoinCode::normalize(raw_code).ok_or(RosterError::EmptyCode)?;
        let entry = self
            .codes
            .get(code.clone())
            .await?
            .ok_or(RosterError::InvalidCode)?;

        let mirror_key = JoinedKey {
            student: student.uid.clone(),
            classroom: entry.classroom_id.clone(),
        };
        if self.joined.exists(mirror_key.clone()).await? {
            return Err(RosterError::AlreadyJoined);
        }

        let name = self.student_name(student).await?;
        let joined_at = Utc::now();
        let membership = Membership {
            role: MemberRole::Student,
            joined_at,
            join_code: code.clone(),
            student_id: student.uid.clone(),
            name,
        };
        self.members
            .put(
                MemberKey {
                    classroom: entry.classroom_id.clone(),
                    student: student.uid.clone(),
                },
                membership.clone(),
            )
            .await?;

        let mirror = JoinedClassroom {
            classroom_id: entry.classroom_id.clone(),
            joined_at,
            join_code: code,
        };
        if let Err(e) = self.joined.put(mirror_key, mirror).await {
            warn!(classroom = %entry.classroom_id, error = %e, "Membership written without its mirror");
            return Err(e.into());
        }

        info!(classroom = %entry.classroom_id, student = %student.uid, "Joined classroom");
        Ok(membership)
    }

    /// Name captured into the membership: profile name, then the identity's
    /// display name, then a placeholder.
    async fn student_name(&self, student: &Identity) -> Result<String, RosterError> {
        let profile = self.profiles.get(student.uid.clone()).await?;
        Ok(profile
            .map(|p| p.name)
            .filter(|name| !name.trim().is_empty())
            .or_else(|| student.display_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_STUDENT_NAME.to_string()))
    }

    /// "My classes": every joined classroom with its active assignments and the
    /// student's own progress. Classrooms deleted since joining are skipped.
    pub async fn my_classrooms(
        &self,
        student: &Identity,
    ) -> Result<Vec<StudentClassroom>, RosterError> {
        let mut result = Vec::new();

        for (_, joined) in self.joined.list(student.uid.clone()).await? {
            let Some(classroom) = self.classrooms.get(joined.classroom_id.clone()).await? else {
                debug!(classroom = %joined.classroom_id, "Joined classroom no longer exists");
                continue;
            };

            let slots = SlotPair::from_docs(self.slots.list(classroom.id.clone()).await?);
            let mut assignments = Vec::new();
            for slot in SlotId::ALL {
                let Some(assignment) = slots.get(slot).filter(|a| a.is_active).cloned() else {
                    continue;
                };
                let key = SlotKey::new(classroom.id.clone(), slot).submission(student.uid.clone());
                let submission = self.submissions.store().get(key).await?;
                assignments.push(StudentAssignment {
                    slot,
                    assignment,
                    submission,
                });
            }

            result.push(StudentClassroom {
                classroom,
                joined,
                assignments,
            });
        }

        Ok(result)
    }
}
