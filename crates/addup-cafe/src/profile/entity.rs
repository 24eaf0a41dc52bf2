use crate::model::{UserId, UserProfile};
use cafe_store::Document;

impl Document for UserProfile {
    type Key = UserId;
    type Parent = ();
    const COLLECTION: &'static str = "users";

    fn parent(_key: &UserId) {}

    fn path(key: &UserId) -> String {
        format!("users/{key}")
    }

    fn validate(&self, _key: &UserId) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        Ok(())
    }
}
