//! # Domain Model
//!
//! Plain data for every stored document, serialized with the camelCase field names
//! of the logical storage shape. Store wiring (keys, parents, validation) lives next
//! to each owning area, e.g. [`crate::submission::entity`].

pub mod assignment;
pub mod classroom;
pub mod ids;
pub mod membership;
pub mod profile;
pub mod submission;

pub use assignment::*;
pub use classroom::*;
pub use ids::*;
pub use membership::*;
pub use profile::*;
pub use submission::*;
