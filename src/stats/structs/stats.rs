use serde::{Deserialize, Serialize};

/// Point-in-time copy of the atomic counters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Stats {
    pub started: i64,
    pub sessions_active: i64,
    pub logins_handled: i64,
    pub signups_handled: i64,
    pub searches_handled: i64,
    pub shares_handled: i64,
    pub peers_registered: i64,
    pub files_indexed: i64,
    pub force_disconnects: i64,
    pub persist_failures: i64,
}
