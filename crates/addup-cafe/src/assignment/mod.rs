//! # Assignment Registry
//!
//! Each classroom has two fixed slots, `slot1` and `slot2`. A slot is either absent
//! or holds one [`AssignmentSlot`](crate::model::AssignmentSlot) bound to a
//! restaurant menu. Creating into an active slot is refused; the slot has to be
//! deleted first, which also sweeps its submissions. The other slot never blocks.
//!
//! Operations live on [`AssignmentClient`](crate::clients::AssignmentClient).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{AssignmentSlot, SlotId, SlotKey};
use serde::Serialize;

/// Current contents of both slots of a classroom.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotPair {
    pub slot1: Option<AssignmentSlot>,
    pub slot2: Option<AssignmentSlot>,
}

impl SlotPair {
    pub fn from_docs(docs: impl IntoIterator<Item = (SlotKey, AssignmentSlot)>) -> Self {
        let mut pair = Self::default();
        for (key, doc) in docs {
            pair.set(key.slot, Some(doc));
        }
        pair
    }

    pub fn get(&self, slot: SlotId) -> Option<&AssignmentSlot> {
        match slot {
            SlotId::Slot1 => self.slot1.as_ref(),
            SlotId::Slot2 => self.slot2.as_ref(),
        }
    }

    pub fn set(&mut self, slot: SlotId, doc: Option<AssignmentSlot>) {
        match slot {
            SlotId::Slot1 => self.slot1 = doc,
            SlotId::Slot2 => self.slot2 = doc,
        }
    }

    pub fn is_active(&self, slot: SlotId) -> bool {
        self.get(slot).is_some_and(|doc| doc.is_active)
    }
}
