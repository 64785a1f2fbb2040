use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::session_handle::SessionHandle;

/// Map of identity to live session handle.
///
/// Enforces at most one live control connection per identity; doubles as
/// the lookup table for administrative force-disconnects.
#[derive(Default)]
pub struct ActiveSessions {
    pub(crate) inner: Arc<RwLock<BTreeMap<String, Arc<SessionHandle>>>>,
}
