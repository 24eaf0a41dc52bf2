//! # System Lifecycle
//!
//! Starting, wiring and stopping the cafe.
//!
//! [`CafeSystem::new`] spawns one [`StoreActor`](cafe_store::StoreActor) per document
//! kind (see [`Stores`]) and builds the domain clients over them. Clients never
//! hold each other in a cycle, so shutdown is just dropping every client and
//! awaiting the actor tasks: each actor leaves its loop when its channel closes.
//!
//! ```text
//! CafeSystem
//! ├── RosterClient ──────┬──▶ classrooms, classroomCodes, members,
//! │                      │    joinedClassrooms, users, sessions
//! │                      ├──▶ AssignmentClient (cascades)
//! │                      └──▶ SubmissionClient (cascades)
//! ├── AssignmentClient ──┬──▶ sessions, classrooms
//! │                      └──▶ SubmissionClient
//! ├── SubmissionClient ─────▶ submissions, sessions
//! ├── ProfileClient ────────▶ users
//! └── ProgressView ─────────▶ classrooms, members, sessions, submissions
//! ```
//!
//! Configuration comes from [`CafeConfig::from_env`]; logging from [`setup_tracing`].

pub mod cafe_system;
pub mod config;
pub mod stores;
pub mod tracing;

pub use cafe_system::*;
pub use config::*;
pub use stores::*;
pub use self::tracing::setup_tracing;

use crate::roster::RosterPolicy;

impl CafeConfig {
    pub fn roster_policy(&self) -> RosterPolicy {
        RosterPolicy {
            classroom_quota: self.classroom_quota,
            code_length: self.code_length,
            code_attempts: self.code_attempts,
        }
    }
}
