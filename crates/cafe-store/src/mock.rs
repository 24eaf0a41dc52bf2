//! # Scripted Stores for Tests
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered
//! from a FIFO queue of expectations instead of a live collection. It is the tool
//! for driving code paths that a healthy in-memory store never takes: timeouts,
//! backend failures, a write that fails halfway through a multi-step operation.
//!
//! | | `MockStore` | `StoreActor` |
//! |---|---|---|
//! | State | none, only scripted replies | real documents |
//! | Failure injection | `return_err(..)` | not possible |
//! | Use for | code *around* the store | the store itself, full flows |
//!
//! ```rust
//! use cafe_store::mock::MockStore;
//! use cafe_store::{Document, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note(String);
//! impl Document for Note {
//!     type Key = u32;
//!     type Parent = ();
//!     const COLLECTION: &'static str = "notes";
//!     fn parent(_: &u32) {}
//!     fn path(key: &u32) -> String { format!("notes/{key}") }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockStore::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note("hi".into())));
//!     mock.expect_delete(1).return_err(StoreError::Backend("disk full".into()));
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(client.delete(1).await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the head of the queue (wrong operation or wrong key)
//! is answered with [`StoreError::Backend`] and remembered; [`MockStore::verify`]
//! then fails the test.

use crate::client::StoreClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc;

enum Expectation<T: Document> {
    Get {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
    Put {
        key: T::Key,
        response: Result<(), StoreError>,
    },
    Create {
        key: T::Key,
        response: Result<(), StoreError>,
    },
    Delete {
        key: T::Key,
        response: Result<bool, StoreError>,
    },
    List {
        parent: T::Parent,
        response: Result<Vec<(T::Key, T)>, StoreError>,
    },
}

struct Script<T: Document> {
    expectations: VecDeque<Expectation<T>>,
    unexpected: Vec<String>,
}

type Shared<T> = Arc<Mutex<Script<T>>>;

fn lock<T: Document>(script: &Shared<T>) -> MutexGuard<'_, Script<T>> {
    script
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scripted stand-in for a store actor.
pub struct MockStore<T: Document> {
    client: StoreClient<T>,
    script: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockStore<T> {
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(64);
        let script: Shared<T> = Arc::new(Mutex::new(Script {
            expectations: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let served = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&served).expectations.pop_front();
                if let Some(miss) = answer(request, next) {
                    lock(&served).unexpected.push(miss);
                }
            }
        });

        Self {
            client: StoreClient::new(sender, Duration::from_secs(5)),
            script,
            _handle: handle,
        }
    }

    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&self, key: T::Key) -> GetExpectation<T> {
        GetExpectation {
            key,
            script: self.script.clone(),
        }
    }

    pub fn expect_put(&self, key: T::Key) -> WriteExpectation<T> {
        WriteExpectation {
            key,
            create: false,
            script: self.script.clone(),
        }
    }

    pub fn expect_create(&self, key: T::Key) -> WriteExpectation<T> {
        WriteExpectation {
            key,
            create: true,
            script: self.script.clone(),
        }
    }

    pub fn expect_delete(&self, key: T::Key) -> DeleteExpectation<T> {
        DeleteExpectation {
            key,
            script: self.script.clone(),
        }
    }

    pub fn expect_list(&self, parent: T::Parent) -> ListExpectation<T> {
        ListExpectation {
            parent,
            script: self.script.clone(),
        }
    }

    /// Panics if an expectation is still queued or a request went unmatched.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.unexpected.is_empty() {
            panic!("Unexpected store requests: {:?}", script.unexpected);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }
}

/// Replies to `request` from `expected`, or describes the mismatch.
fn answer<T: Document>(
    request: StoreRequest<T>,
    expected: Option<Expectation<T>>,
) -> Option<String> {
    match (request, expected) {
        (StoreRequest::Get { key, respond_to }, Some(Expectation::Get { key: want, response }))
            if key == want =>
        {
            let _ = respond_to.send(response);
            None
        }
        (
            StoreRequest::Put {
                key, respond_to, ..
            },
            Some(Expectation::Put { key: want, response }),
        )
        | (
            StoreRequest::Create {
                key, respond_to, ..
            },
            Some(Expectation::Create { key: want, response }),
        ) if key == want => {
            let _ = respond_to.send(response);
            None
        }
        (
            StoreRequest::Delete { key, respond_to },
            Some(Expectation::Delete { key: want, response }),
        ) if key == want => {
            let _ = respond_to.send(response);
            None
        }
        (
            StoreRequest::List { parent, respond_to },
            Some(Expectation::List {
                parent: want,
                response,
            }),
        ) if parent == want => {
            let _ = respond_to.send(response);
            None
        }
        (StoreRequest::Get { key, respond_to }, _) => {
            let what = format!("get {}", T::path(&key));
            let _ = respond_to.send(unexpected(&what));
            Some(what)
        }
        (StoreRequest::Put { key, respond_to, .. }, _) => {
            let what = format!("put {}", T::path(&key));
            let _ = respond_to.send(unexpected(&what));
            Some(what)
        }
        (StoreRequest::Create { key, respond_to, .. }, _) => {
            let what = format!("create {}", T::path(&key));
            let _ = respond_to.send(unexpected(&what));
            Some(what)
        }
        (StoreRequest::Delete { key, respond_to }, _) => {
            let what = format!("delete {}", T::path(&key));
            let _ = respond_to.send(unexpected(&what));
            Some(what)
        }
        (StoreRequest::List { parent, respond_to }, _) => {
            let what = format!("list {parent:?}");
            let _ = respond_to.send(unexpected(&what));
            Some(what)
        }
    }
}

fn unexpected<R>(what: &str) -> Result<R, StoreError> {
    Err(StoreError::Backend(format!("unexpected {what}")))
}

pub struct GetExpectation<T: Document> {
    key: T::Key,
    script: Shared<T>,
}

impl<T: Document> GetExpectation<T> {
    pub fn return_ok(self, doc: Option<T>) {
        self.push(Ok(doc));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        lock(&self.script).expectations.push_back(Expectation::Get {
            key: self.key,
            response,
        });
    }
}

/// Covers both `put` and `create`.
pub struct WriteExpectation<T: Document> {
    key: T::Key,
    create: bool,
    script: Shared<T>,
}

impl<T: Document> WriteExpectation<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), StoreError>) {
        let expectation = if self.create {
            Expectation::Create {
                key: self.key,
                response,
            }
        } else {
            Expectation::Put {
                key: self.key,
                response,
            }
        };
        lock(&self.script).expectations.push_back(expectation);
    }
}

pub struct DeleteExpectation<T: Document> {
    key: T::Key,
    script: Shared<T>,
}

impl<T: Document> DeleteExpectation<T> {
    pub fn return_ok(self, existed: bool) {
        self.push(Ok(existed));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<bool, StoreError>) {
        lock(&self.script).expectations.push_back(Expectation::Delete {
            key: self.key,
            response,
        });
    }
}

pub struct ListExpectation<T: Document> {
    parent: T::Parent,
    script: Shared<T>,
}

impl<T: Document> ListExpectation<T> {
    pub fn return_ok(self, children: Vec<(T::Key, T)>) {
        self.push(Ok(children));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<(T::Key, T)>, StoreError>) {
        lock(&self.script).expectations.push_back(Expectation::List {
            parent: self.parent,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        body: String,
    }

    impl Document for Note {
        type Key = u32;
        type Parent = ();
        const COLLECTION: &'static str = "notes";

        fn parent(_key: &u32) {}

        fn path(key: &u32) -> String {
            format!("notes/{key}")
        }
    }

    fn note(body: &str) -> Note {
        Note { body: body.into() }
    }

    #[tokio::test]
    async fn test_mock_store_serves_expectations_in_order() {
        let mock = MockStore::<Note>::new();
        mock.expect_create(1).return_ok();
        mock.expect_get(1).return_ok(Some(note("hello")));
        mock.expect_list(()).return_ok(vec![(1, note("hello"))]);

        let client = mock.client();
        client.create(1, note("hello")).await.unwrap();
        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(note("hello")));
        assert_eq!(client.list(()).await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_store_injects_errors() {
        let mock = MockStore::<Note>::new();
        mock.expect_put(7)
            .return_err(StoreError::Timeout(Duration::from_millis(10)));

        let result = mock.client().put(7, note("x")).await;
        assert!(matches!(result, Err(StoreError::Timeout(_))));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected store requests")]
    async fn test_mock_store_flags_wrong_key() {
        let mock = MockStore::<Note>::new();
        mock.expect_delete(1).return_ok(true);

        let result = mock.client().delete(2).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
        mock.verify();
    }
}
