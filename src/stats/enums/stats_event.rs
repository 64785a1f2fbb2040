use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant names one counter; `TrackerState::update_stats` applies a
/// signed delta to it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    SessionsActive,
    LoginsHandled,
    SignupsHandled,
    SearchesHandled,
    SharesHandled,
    PeersRegistered,
    FilesIndexed,
    ForceDisconnects,
    PersistFailures,
}
