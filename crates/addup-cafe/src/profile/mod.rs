//! # User Profiles
//!
//! `users/{uid}` holds a role and a display name. The role is fixed by the first
//! registration; registering again keeps it.

pub mod entity;
pub mod error;

pub use error::*;
