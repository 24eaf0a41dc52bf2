use crate::model::{
    Classroom, ClassroomId, CodeIndexEntry, JoinCode, JoinedClassroom, JoinedKey, MemberKey,
    Membership, UserId,
};
use cafe_store::Document;

impl Document for Classroom {
    type Key = ClassroomId;
    type Parent = ();
    const COLLECTION: &'static str = "classrooms";

    fn parent(_key: &ClassroomId) {}

    fn path(key: &ClassroomId) -> String {
        format!("classrooms/{key}")
    }

    fn validate(&self, key: &ClassroomId) -> Result<(), String> {
        if &self.id != key {
            return Err(format!("id {} does not match key", self.id));
        }
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        Ok(())
    }
}

impl Document for CodeIndexEntry {
    type Key = JoinCode;
    type Parent = ();
    const COLLECTION: &'static str = "classroomCodes";

    fn parent(_key: &JoinCode) {}

    fn path(key: &JoinCode) -> String {
        format!("classroomCodes/{key}")
    }
}

impl Document for Membership {
    type Key = MemberKey;
    type Parent = ClassroomId;
    const COLLECTION: &'static str = "members";

    fn parent(key: &MemberKey) -> ClassroomId {
        key.classroom.clone()
    }

    fn path(key: &MemberKey) -> String {
        format!("classrooms/{}/members/{}", key.classroom, key.student)
    }

    fn validate(&self, key: &MemberKey) -> Result<(), String> {
        if self.student_id != key.student {
            return Err(format!("studentId {} does not match key", self.student_id));
        }
        Ok(())
    }
}

impl Document for JoinedClassroom {
    type Key = JoinedKey;
    type Parent = UserId;
    const COLLECTION: &'static str = "joinedClassrooms";

    fn parent(key: &JoinedKey) -> UserId {
        key.student.clone()
    }

    fn path(key: &JoinedKey) -> String {
        format!("users/{}/joinedClassrooms/{}", key.student, key.classroom)
    }

    fn validate(&self, key: &JoinedKey) -> Result<(), String> {
        if self.classroom_id != key.classroom {
            return Err(format!("classroomId {} does not match key", self.classroom_id));
        }
        Ok(())
    }
}
