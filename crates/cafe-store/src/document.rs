use std::fmt::Debug;
use std::hash::Hash;

/// A document kind managed by a [`StoreActor`](crate::StoreActor).
///
/// Every stored kind declares how it is addressed (`Key`), which collection scan
/// it belongs to (`Parent`), and the logical path a key renders to. The store never
/// interprets document contents beyond the optional [`Document::validate`] hook.
///
/// # Example
///
/// ```rust
/// use cafe_store::Document;
///
/// #[derive(Clone, Debug)]
/// struct Note { body: String }
///
/// impl Document for Note {
///     type Key = (u32, u32);
///     type Parent = u32;
///     const COLLECTION: &'static str = "notes";
///
///     fn parent(key: &Self::Key) -> Self::Parent { key.0 }
///     fn path(key: &Self::Key) -> String { format!("books/{}/notes/{}", key.0, key.1) }
/// }
/// ```
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// Point address of one document.
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// Address of the collection a document is listed under.
    type Parent: Clone + Eq + Debug + Send + Sync + 'static;

    /// Collection name used in log fields.
    const COLLECTION: &'static str;

    fn parent(key: &Self::Key) -> Self::Parent;

    /// Logical storage path, e.g. `classrooms/abc/members/u1`.
    fn path(key: &Self::Key) -> String;

    /// Checked on every write. A rejected write leaves the stored document untouched.
    fn validate(&self, _key: &Self::Key) -> Result<(), String> {
        Ok(())
    }
}
