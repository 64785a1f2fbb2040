use crate::registry::structs::peer_record::PeerRecord;

/// One entry of the share index.
///
/// `peers` keeps insertion order; `added` is the first-seen sequence number
/// used to order search results. An entry with an empty peer set never
/// survives the operation that emptied it.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub peers: Vec<PeerRecord>,
    pub added: u64,
}
