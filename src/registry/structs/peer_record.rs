use serde::{Deserialize, Serialize};

/// A currently-connected peer.
///
/// Identity-equality is by **address only**: two records with the same
/// address are the same peer even when the usernames differ. That is the
/// registry's de-duplication rule, so `PartialEq`/`Eq`/`Hash` are written
/// out by hand rather than derived structurally.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PeerRecord {
    pub username: String,
    pub address: String,
}
