//! Session store with subscribe/notify semantics.
//!
//! Views react to auth changes through a watch channel instead of re-reading
//! persisted state on every navigation. The persisted copy (when attached)
//! is written through on every change so a restart sees the same session.

use super::storage::SessionStorage;
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of the current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_superuser: bool,
    pub is_staff: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Dashboard is offered in navigation to staff and superusers only.
    pub fn can_view_dashboard(&self) -> bool {
        self.is_authenticated() && (self.is_superuser || self.is_staff)
    }
}

/// Thread-safe session store using a watch channel.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sender: Arc<watch::Sender<Session>>,
    receiver: watch::Receiver<Session>,
    storage: Option<Arc<SessionStorage>>,
}

impl SessionStore {
    /// In-memory store with no persistence. Used by tests and one-shot
    /// flows that never outlive the process.
    pub fn in_memory() -> Self {
        let (sender, receiver) = watch::channel(Session::anonymous());
        Self {
            sender: Arc::new(sender),
            receiver,
            storage: None,
        }
    }

    /// Store backed by persisted state; restores whatever the storage holds.
    pub fn with_storage(storage: SessionStorage) -> Self {
        let initial = match storage.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::anonymous(),
            Err(err) => {
                log::warn!("Discarding unreadable session state: {err}");
                Session::anonymous()
            }
        };
        let (sender, receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
            receiver,
            storage: Some(Arc::new(storage)),
        }
    }

    /// Current session snapshot.
    pub fn current(&self) -> Session {
        self.receiver.borrow().clone()
    }

    /// Current token, read at call time so a logout affects every
    /// subsequent request immediately.
    pub fn token(&self) -> Option<String> {
        self.receiver.borrow().token.clone()
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.receiver.clone()
    }

    /// Record a successful login.
    pub fn set_session(&self, token: String, is_superuser: bool, is_staff: bool) {
        let session = Session {
            token: Some(token),
            is_superuser,
            is_staff,
        };
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.save(&session) {
                log::warn!("Failed to persist session: {err}");
            }
        }
        // Ignore send errors (no receivers)
        let _ = self.sender.send(session);
    }

    /// Drop the token and both role flags, in memory and on disk.
    pub fn clear_session(&self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.clear() {
                log::warn!("Failed to clear persisted session: {err}");
            }
        }
        let _ = self.sender.send(Session::anonymous());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_gates_everything() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.can_view_dashboard());
    }

    #[test]
    fn dashboard_gating_needs_a_role() {
        let store = SessionStore::in_memory();
        store.set_session("tok".into(), false, false);
        assert!(store.current().is_authenticated());
        assert!(!store.current().can_view_dashboard());

        store.set_session("tok".into(), false, true);
        assert!(store.current().can_view_dashboard());

        store.set_session("tok".into(), true, false);
        assert!(store.current().can_view_dashboard());
    }

    #[test]
    fn clear_resets_all_three_values() {
        let store = SessionStore::in_memory();
        store.set_session("tok".into(), true, true);
        store.clear_session();
        assert_eq!(store.current(), Session::anonymous());
        assert_eq!(store.token(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let store = SessionStore::in_memory();
        let mut receiver = store.subscribe();

        store.set_session("tok".into(), false, true);
        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_authenticated());

        store.clear_session();
        receiver.changed().await.unwrap();
        assert!(!receiver.borrow().is_authenticated());
    }
}
