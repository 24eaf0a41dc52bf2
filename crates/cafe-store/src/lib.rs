//! # Cafe Store
//!
//! A small document-store collaborator built on the actor model. Each document kind
//! lives in its own [`StoreActor`], a Tokio task that owns the collection outright
//! and answers requests one by one. Everything else talks to it through a
//! [`StoreClient`], a cheap, cloneable handle over an mpsc channel.
//!
//! ## Shape of the store
//!
//! | Operation | Client method | Notes |
//! |---|---|---|
//! | point read | [`StoreClient::get`] | `None` when absent |
//! | point write | [`StoreClient::put`] | full replace |
//! | guarded create | [`StoreClient::create`] | fails with [`StoreError::AlreadyExists`] |
//! | point delete | [`StoreClient::delete`] | idempotent, reports whether a document existed |
//! | collection scan | [`StoreClient::list`] | children of one parent, insertion order |
//!
//! There are no transactions. Multi-document operations are sequences of the calls
//! above, and callers decide what a failed step means.
//!
//! Every call is bounded by the client's timeout, so a wedged or overloaded store
//! surfaces as [`StoreError::Timeout`] instead of a hung caller.
//!
//! ## Pieces
//!
//! - [`Document`]: how a kind is addressed (key, parent, logical path) and validated
//! - [`StoreActor`] / [`StoreClient`]: the server and client halves
//! - [`StoreBacked`]: trait for domain clients fronting one collection
//! - [`mock`]: scripted stores for failure injection in tests

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreBacked;
pub use document::Document;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
