use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by a [`StoreActor`](crate::StoreActor).
///
/// The set mirrors what a plain document database offers: point read, full-replace
/// write, an exists-guarded create, idempotent delete and a scan of one parent's
/// children. There are no transactions and no range queries.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Put {
        key: T::Key,
        doc: T,
        respond_to: Response<()>,
    },
    Create {
        key: T::Key,
        doc: T,
        respond_to: Response<()>,
    },
    Delete {
        key: T::Key,
        respond_to: Response<bool>,
    },
    List {
        parent: T::Parent,
        respond_to: Response<Vec<(T::Key, T)>>,
    },
}
