use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Assignment,
}

/// A restaurant assignment occupying one classroom slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSlot {
    #[serde(rename = "type")]
    pub kind: SlotKind,
    pub restaurant_key: String,
    pub restaurant_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}
