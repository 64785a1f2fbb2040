use serde::{Deserialize, Serialize};

/// Account persistence settings for the tracker daemon.
///
/// The user table and the single-row administrator stats file live next to
/// each other; both are rewritten through a temporary file and an atomic
/// rename so concurrent readers never observe a partial write.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub users_file: String,
    pub admin_stats_file: String,
    pub save_retries: u64,
    pub save_retry_delay_ms: u64,
}
