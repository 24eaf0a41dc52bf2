use crate::model::{SlotKey, Submission, SubmissionKey};
use cafe_store::Document;

impl Document for Submission {
    type Key = SubmissionKey;
    type Parent = SlotKey;
    const COLLECTION: &'static str = "submissions";

    fn parent(key: &SubmissionKey) -> SlotKey {
        key.slot_key()
    }

    fn path(key: &SubmissionKey) -> String {
        format!(
            "classrooms/{}/sessions/{}/submissions/{}",
            key.classroom, key.slot, key.student
        )
    }

    fn validate(&self, key: &SubmissionKey) -> Result<(), String> {
        if self.student_id != key.student {
            return Err(format!(
                "studentId {} does not match key {}",
                self.student_id, key.student
            ));
        }
        if self.correct_count > self.questions_answered {
            return Err(format!(
                "correctCount {} exceeds questionsAnswered {}",
                self.correct_count, self.questions_answered
            ));
        }
        Ok(())
    }
}
