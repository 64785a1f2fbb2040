use parking_lot::Mutex;
use tokio::sync::Notify;

/// Handle to a live session, held in the active-session map.
///
/// `kick` wakes the session out of its blocking line-read; the session
/// sends one `FORCE_DISCONNECT <reason>` line and runs its cleanup path.
pub struct SessionHandle {
    pub(crate) notify: Notify,
    pub(crate) kick_reason: Mutex<Option<String>>,
}
