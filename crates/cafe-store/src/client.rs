use crate::document::Document;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Cloneable handle to a [`StoreActor`](crate::StoreActor).
///
/// Every call is bounded by the client's timeout: a request that cannot be queued,
/// or whose reply does not arrive in time, fails with [`StoreError::Timeout`].
pub struct StoreClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
    timeout: Duration,
}

impl<T: Document> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            timeout: self.timeout,
        }
    }
}

impl<T: Document> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>, timeout: Duration) -> Self {
        Self { sender, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Get { key, respond_to })
            .await
    }

    pub async fn exists(&self, key: T::Key) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Full replace. Creates the document when absent.
    pub async fn put(&self, key: T::Key, doc: T) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::Put {
            key,
            doc,
            respond_to,
        })
        .await
    }

    /// Writes only if nothing is stored under `key`.
    pub async fn create(&self, key: T::Key, doc: T) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::Create {
            key,
            doc,
            respond_to,
        })
        .await
    }

    /// Returns whether a document was removed. Deleting an absent key is not an error.
    pub async fn delete(&self, key: T::Key) -> Result<bool, StoreError> {
        self.call(|respond_to| StoreRequest::Delete { key, respond_to })
            .await
    }

    /// All children of `parent`, oldest first.
    pub async fn list(&self, parent: T::Parent) -> Result<Vec<(T::Key, T)>, StoreError> {
        self.call(|respond_to| StoreRequest::List { parent, respond_to })
            .await
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        let exchange = async {
            self.sender
                .send(request(respond_to))
                .await
                .map_err(|_| StoreError::ActorClosed)?;
            response.await.map_err(|_| StoreError::ActorDropped)?
        };
        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}
