use std::sync::Arc;
use log::info;
use crate::tracker::structs::active_sessions::ActiveSessions;
use crate::tracker::structs::session_handle::SessionHandle;

impl ActiveSessions {
    pub fn new() -> ActiveSessions {
        ActiveSessions::default()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.inner.read().contains_key(username)
    }

    /// Installs a session for `username`.
    ///
    /// Returns `None` when the identity already has a live session; the
    /// caller must treat that as a failed login even with a correct
    /// credential.
    pub fn insert(&self, username: &str) -> Option<Arc<SessionHandle>>
    {
        let mut sessions = self.inner.write();
        if sessions.contains_key(username) {
            return None;
        }
        let handle = SessionHandle::new();
        sessions.insert(username.to_string(), handle.clone());
        Some(handle)
    }

    /// Removes the entry, but only when it still belongs to `handle`.
    ///
    /// A kicked session cleaning up must not evict a successor that logged
    /// in between the kick and the cleanup.
    pub fn remove(&self, username: &str, handle: &Arc<SessionHandle>)
    {
        let mut sessions = self.inner.write();
        if let Some(current) = sessions.get(username) {
            if Arc::ptr_eq(current, handle) {
                sessions.remove(username);
            }
        }
    }

    /// Force-disconnects the identity's live session, when there is one.
    pub fn kick(&self, username: &str, reason: &str) -> bool
    {
        let handle = self.inner.read().get(username).cloned();
        match handle {
            Some(handle) => {
                info!("[SESSION] Kicking live session of {username}: {reason}");
                handle.kick(reason);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.inner.read().len()
    }
}
