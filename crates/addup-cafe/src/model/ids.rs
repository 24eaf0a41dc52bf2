use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque classroom identifier (a v4 UUID in simple form).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassroomId(pub String);

impl ClassroomId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a signed-in user, teacher or student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two fixed assignment positions of a classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    Slot1,
    Slot2,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::Slot1, SlotId::Slot2];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::Slot1 => "slot1",
            SlotId::Slot2 => "slot2",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slot1" => Ok(SlotId::Slot1),
            "slot2" => Ok(SlotId::Slot2),
            other => Err(format!("unknown slot: {other}")),
        }
    }
}

/// A classroom join code, always stored trimmed and upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    /// Normalizes user input. Returns `None` when nothing is left after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let code = raw.trim().to_uppercase();
        (!code.is_empty()).then_some(Self(code))
    }

    /// Wraps a code produced by the generator, which is already canonical.
    pub(crate) fn generated(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Composite keys ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    pub classroom: ClassroomId,
    pub student: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinedKey {
    pub student: UserId,
    pub classroom: ClassroomId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub classroom: ClassroomId,
    pub slot: SlotId,
}

impl SlotKey {
    pub fn new(classroom: ClassroomId, slot: SlotId) -> Self {
        Self { classroom, slot }
    }

    pub fn submission(&self, student: UserId) -> SubmissionKey {
        SubmissionKey {
            classroom: self.classroom.clone(),
            slot: self.slot,
            student,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionKey {
    pub classroom: ClassroomId,
    pub slot: SlotId,
    pub student: UserId,
}

impl SubmissionKey {
    pub fn slot_key(&self) -> SlotKey {
        SlotKey::new(self.classroom.clone(), self.slot)
    }
}
