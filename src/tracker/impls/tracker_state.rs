use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use crate::accounts::structs::account_store::AccountStore;
use crate::accounts::structs::salted_sha256::SaltedSha256;
use crate::accounts::traits::credential_hasher::CredentialHasher;
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::active_sessions::ActiveSessions;
use crate::tracker::structs::tracker_state::TrackerState;

impl TrackerState {
    pub fn new(config: Arc<Configuration>) -> TrackerState {
        Self::with_hasher(config, Arc::new(SaltedSha256))
    }

    pub fn with_hasher(config: Arc<Configuration>, hasher: Arc<dyn CredentialHasher>) -> TrackerState
    {
        let accounts = AccountStore::new(
            Path::new(&config.tracker_config.users_file),
            Path::new(&config.tracker_config.admin_stats_file),
            hasher,
            config.tracker_config.save_retries,
            Duration::from_millis(config.tracker_config.save_retry_delay_ms),
        );

        let stats = Arc::new(StatsAtomics::default());
        stats.started.store(chrono::Utc::now().timestamp(), std::sync::atomic::Ordering::SeqCst);

        TrackerState {
            config,
            accounts,
            registry: PeerRegistry::new(),
            sessions: ActiveSessions::new(),
            stats,
        }
    }
}
