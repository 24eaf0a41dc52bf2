//! # Teacher Aggregation View
//!
//! A read model joining memberships with both slots' submissions. Each member
//! gets one row in membership order, with one [`SlotProgress`] cell per slot.
//! Missing pieces never fail the read: no slot document means `SlotInactive`, no
//! submission means `NotStarted`, and a failed submission scan for a slot shows
//! as `Unavailable` for that slot only.
//!
//! [`ProgressPoller`] keeps a snapshot fresh in the background.

pub mod poller;
pub mod snapshot;

pub use poller::{PollState, ProgressPoller};
pub use snapshot::{ClassroomSnapshot, ProgressView, SlotProgress, StudentRow};
