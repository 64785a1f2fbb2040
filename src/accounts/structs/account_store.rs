use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::accounts::structs::identity::Identity;
use crate::accounts::traits::credential_hasher::CredentialHasher;

/// Durable store of user identities and their transfer statistics.
///
/// The in-memory table is the source of truth; every mutation persists the
/// full table. The administrator identity lives outside the table and only
/// its statistics touch disk, in a dedicated single-row file.
pub struct AccountStore {
    pub users: Arc<RwLock<BTreeMap<String, Identity>>>,
    pub admin: Arc<RwLock<Identity>>,
    pub(crate) users_file: PathBuf,
    pub(crate) admin_stats_file: PathBuf,
    pub(crate) hasher: Arc<dyn CredentialHasher>,
    /* full-table rewrites are serialized; readers go through the atomic rename */
    pub(crate) save_lock: Mutex<()>,
    pub(crate) save_retries: u64,
    pub(crate) save_retry_delay: Duration,
}
