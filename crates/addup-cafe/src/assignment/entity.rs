use crate::model::{AssignmentSlot, ClassroomId, SlotKey};
use cafe_store::Document;

impl Document for AssignmentSlot {
    type Key = SlotKey;
    type Parent = ClassroomId;
    const COLLECTION: &'static str = "sessions";

    fn parent(key: &SlotKey) -> ClassroomId {
        key.classroom.clone()
    }

    fn path(key: &SlotKey) -> String {
        format!("classrooms/{}/sessions/{}", key.classroom, key.slot)
    }

    fn validate(&self, _key: &SlotKey) -> Result<(), String> {
        if self.restaurant_key.is_empty() {
            return Err("restaurantKey is empty".into());
        }
        Ok(())
    }
}
