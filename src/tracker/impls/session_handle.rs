use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::Notify;
use crate::tracker::structs::session_handle::SessionHandle;

impl SessionHandle {
    pub fn new() -> Arc<SessionHandle> {
        Arc::new(SessionHandle {
            notify: Notify::new(),
            kick_reason: Mutex::new(None),
        })
    }

    /// Wakes the session out of its blocked read with a reason.
    pub fn kick(&self, reason: &str)
    {
        *self.kick_reason.lock() = Some(reason.to_string());
        self.notify.notify_one();
    }

    pub fn take_reason(&self) -> Option<String> {
        self.kick_reason.lock().take()
    }

    pub async fn kicked(&self) {
        self.notify.notified().await
    }
}
