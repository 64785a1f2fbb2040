use serde::{Deserialize, Serialize};
use crate::accounts::enums::role::Role;
use crate::accounts::structs::transfer_stats::TransferStats;

/// A user account as held in memory.
///
/// `password_hash` is whatever the configured credential hasher produced;
/// the store never sees a plaintext password after hashing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Identity {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub downloads: TransferStats,
    pub uploads: TransferStats,
}
