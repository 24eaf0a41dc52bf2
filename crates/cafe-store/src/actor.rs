//! # Store Actor
//!
//! `StoreActor<T>` is the server half of a document collection. It owns every
//! document of kind `T` and handles [`StoreRequest`]s strictly one at a time, so the
//! map needs no locking. Callers talk to it through a cloneable [`StoreClient`].
//!
//! Insertion order is tracked with a sequence number per document. A full-replace
//! `Put` over an existing key keeps the original sequence, which is what gives
//! collection scans their natural (insertion) order.

use crate::client::StoreClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct Stored<T> {
    seq: u64,
    doc: T,
}

/// Sequential owner of one document collection.
///
/// ```rust
/// use cafe_store::{Document, StoreActor};
/// use std::time::Duration;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Note(String);
///
/// impl Document for Note {
///     type Key = u32;
///     type Parent = ();
///     const COLLECTION: &'static str = "notes";
///     fn parent(_: &u32) {}
///     fn path(key: &u32) -> String { format!("notes/{key}") }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(8, Duration::from_secs(1));
///     tokio::spawn(actor.run());
///
///     client.put(1, Note("hi".into())).await.unwrap();
///     assert_eq!(client.get(1).await.unwrap(), Some(Note("hi".into())));
/// }
/// ```
pub struct StoreActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    docs: HashMap<T::Key, Stored<T>>,
    next_seq: u64,
}

impl<T: Document> StoreActor<T> {
    /// Creates the actor and a client whose calls give up after `timeout`.
    ///
    /// `buffer_size` is the request channel capacity; callers wait for space when it
    /// is full, and that wait counts against the timeout.
    pub fn new(buffer_size: usize, timeout: Duration) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            docs: HashMap::new(),
            next_seq: 1,
        };
        (actor, StoreClient::new(sender, timeout))
    }

    /// Runs until every client has been dropped.
    pub async fn run(mut self) {
        let collection = T::COLLECTION;
        info!(collection, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { key, respond_to } => {
                    let doc = self.docs.get(&key).map(|s| s.doc.clone());
                    debug!(collection, path = %T::path(&key), found = doc.is_some(), "Get");
                    let _ = respond_to.send(Ok(doc));
                }
                StoreRequest::Put {
                    key,
                    doc,
                    respond_to,
                } => {
                    let result = self.write(key, doc, false);
                    let _ = respond_to.send(result);
                }
                StoreRequest::Create {
                    key,
                    doc,
                    respond_to,
                } => {
                    let result = self.write(key, doc, true);
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { key, respond_to } => {
                    let existed = self.docs.remove(&key).is_some();
                    if existed {
                        info!(collection, path = %T::path(&key), size = self.docs.len(), "Deleted");
                    } else {
                        debug!(collection, path = %T::path(&key), "Delete of absent document");
                    }
                    let _ = respond_to.send(Ok(existed));
                }
                StoreRequest::List { parent, respond_to } => {
                    let mut children: Vec<(u64, T::Key, T)> = self
                        .docs
                        .iter()
                        .filter(|(key, _)| T::parent(key) == parent)
                        .map(|(key, stored)| (stored.seq, key.clone(), stored.doc.clone()))
                        .collect();
                    children.sort_by_key(|(seq, _, _)| *seq);
                    debug!(collection, ?parent, count = children.len(), "List");
                    let _ = respond_to.send(Ok(children
                        .into_iter()
                        .map(|(_, key, doc)| (key, doc))
                        .collect()));
                }
            }
        }

        info!(collection, size = self.docs.len(), "Shutdown");
    }

    fn write(&mut self, key: T::Key, doc: T, guard_exists: bool) -> Result<(), StoreError> {
        let collection = T::COLLECTION;
        let path = T::path(&key);

        if let Err(reason) = doc.validate(&key) {
            warn!(collection, %path, %reason, "Write rejected");
            return Err(StoreError::Rejected { path, reason });
        }

        match self.docs.get_mut(&key) {
            Some(_) if guard_exists => {
                warn!(collection, %path, "Create over existing document");
                Err(StoreError::AlreadyExists(path))
            }
            Some(stored) => {
                stored.doc = doc;
                info!(collection, %path, "Replaced");
                Ok(())
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.docs.insert(key, Stored { seq, doc });
                info!(collection, %path, size = self.docs.len(), "Created");
                Ok(())
            }
        }
    }
}
