use std::sync::Arc;
use crate::accounts::structs::account_store::AccountStore;
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::active_sessions::ActiveSessions;

/// Everything the client sessions share.
///
/// Constructed once in `main` and passed into every session handler; there
/// are no process-wide singletons.
pub struct TrackerState {
    pub config: Arc<Configuration>,
    pub accounts: AccountStore,
    pub registry: PeerRegistry,
    pub sessions: ActiveSessions,
    pub stats: Arc<StatsAtomics>,
}
