use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::registry::structs::file_entry::FileEntry;
use crate::registry::structs::peer_record::PeerRecord;

/// Index of currently-connected peers and the files they offer.
///
/// Safe for concurrent use from arbitrarily many client sessions; one
/// coarse lock guards the whole inner state.
pub struct PeerRegistry {
    pub(crate) inner: Arc<RwLock<RegistryInner>>,
}

#[derive(Default)]
pub struct RegistryInner {
    pub peers: Vec<PeerRecord>,
    pub shares: BTreeMap<String, FileEntry>,
    pub next_file_seq: u64,
}
