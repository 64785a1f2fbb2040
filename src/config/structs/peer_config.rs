use serde::{Deserialize, Serialize};

/// Settings for the peer-node daemon.
///
/// The transfer listener binds to `listen_port`; the datagram query
/// responder always binds to `listen_port + 1`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeerConfig {
    pub tracker_address: String,
    pub listen_address: String,
    pub listen_port: u16,
    pub shared_folder: String,
    pub download_folder: String,
    pub chunk_size: usize,
    pub query_timeout_ms: u64,
}
