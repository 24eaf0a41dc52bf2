use crate::{Document, StoreClient, StoreError};
use async_trait::async_trait;

/// Implemented by domain clients that front one primary document collection.
///
/// The domain client supplies its store handle and an error mapping; point reads and
/// idempotent deletes come for free, already instrumented and mapped into the
/// domain's error type.
///
/// ```rust
/// use cafe_store::{Document, StoreBacked, StoreClient, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Note(String);
/// impl Document for Note {
///     type Key = u32;
///     type Parent = ();
///     const COLLECTION: &'static str = "notes";
///     fn parent(_: &u32) {}
///     fn path(key: &u32) -> String { format!("notes/{key}") }
/// }
///
/// #[derive(Debug)]
/// struct NoteError(String);
///
/// struct NoteClient { notes: StoreClient<Note> }
///
/// impl StoreBacked<Note> for NoteClient {
///     type Error = NoteError;
///     fn store(&self) -> &StoreClient<Note> { &self.notes }
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // fetch() and remove() are provided.
///     let _ = client.fetch(1).await;
///     let _ = client.remove(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreBacked<T: Document>: Send + Sync {
    type Error: Send;

    fn store(&self) -> &StoreClient<T>;

    fn map_error(e: StoreError) -> Self::Error;

    #[tracing::instrument(skip(self))]
    async fn fetch(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().get(key).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: T::Key) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.store().delete(key).await.map_err(Self::map_error)
    }
}
