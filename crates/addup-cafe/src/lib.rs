//! # Add Up Café
//!
//! An addition-practice game: students total restaurant orders, teachers run
//! classrooms and watch progress.
//!
//! ## 🧭 Module Tour
//!
//! ### Playing
//! - **[`menu`]**: the static restaurant catalog and [`Money`](menu::Money).
//! - **[`order_session`]**: the greeting → menu → placed → result phase machine
//!   and the scratch calculator.
//! - **[`play`]**: an order session in practice mode or bound to an assignment.
//!
//! ### Classrooms
//! - **[`roster`]**: classrooms, join codes and the enrollment protocol.
//! - **[`assignment`]**: the two assignment slots of a classroom.
//! - **[`submission`]**: each student's progress on a slot.
//! - **[`progress`]**: the teacher's read model and its background poller.
//! - **[`profile`]**: `users/{uid}` role and name.
//!
//! ### Plumbing
//! - **[`clients`]**: domain clients over the [`cafe_store`] actors.
//! - **[`lifecycle`]**: configuration, tracing setup and [`CafeSystem`](lifecycle::CafeSystem).
//! - **[`identity`]**: the signed-in user, passed explicitly to every operation.
//! - **[`error`]**: the shared [`ErrorKind`](error::ErrorKind) taxonomy.
//! - **[`cascade`]**: best-effort multi-step deletes.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p addup-cafe
//! ```

pub mod assignment;
pub mod cascade;
pub mod clients;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_session;
pub mod play;
pub mod profile;
pub mod progress;
pub mod roster;
pub mod submission;
