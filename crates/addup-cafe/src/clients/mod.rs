//! Domain clients. Each one fronts the store collections it owns and enforces
//! the rules of its area before anything is written.

pub mod assignment_client;
pub mod profile_client;
pub mod roster_client;
pub mod submission_client;

pub use assignment_client::AssignmentClient;
pub use profile_client::ProfileClient;
pub use roster_client::RosterClient;
pub use submission_client::SubmissionClient;
