//! # Identity Context
//!
//! The signed-in user is an explicit value. Operations take an [`Identity`]
//! argument instead of reading ambient session state, and the provider marks the
//! login/logout boundary.

use crate::error::ErrorKind;
use crate::model::UserId;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: UserId,
    /// Name reported by the authentication provider, if any.
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>, display_name: Option<&str>) -> Self {
        Self {
            uid: UserId::new(uid),
            display_name: display_name.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Not signed in")]
    SignedOut,
}

impl IdentityError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Permission
    }
}

/// Source of the current authenticated identity.
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<Identity>;

    fn sign_out(&self);

    /// Fires on every sign-in and sign-out.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;

    fn require(&self) -> Result<Identity, IdentityError> {
        self.current().ok_or(IdentityError::SignedOut)
    }
}

/// In-process provider; sign-in is whatever the embedding application says it is.
pub struct LocalIdentity {
    session: watch::Sender<Option<Identity>>,
}

impl Default for LocalIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalIdentity {
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self { session }
    }

    pub fn sign_in(&self, identity: Identity) {
        info!(uid = %identity.uid, "Signed in");
        self.session.send_replace(Some(identity));
    }
}

impl IdentityProvider for LocalIdentity {
    fn current(&self) -> Option<Identity> {
        self.session.borrow().clone()
    }

    fn sign_out(&self) {
        if let Some(previous) = self.session.send_replace(None) {
            info!(uid = %previous.uid, "Signed out");
        }
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.session.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out_bound_the_session() {
        let provider = LocalIdentity::new();
        assert_eq!(provider.require(), Err(IdentityError::SignedOut));

        provider.sign_in(Identity::new("t1", Some("Ms. Rivera")));
        assert_eq!(provider.require().unwrap().uid, UserId::new("t1"));

        let mut changes = provider.subscribe();
        provider.sign_out();
        assert!(changes.has_changed().unwrap());
        assert!(changes.borrow_and_update().is_none());
        assert!(provider.current().is_none());
    }
}
