use std::fmt;
use std::hash::{Hash, Hasher};
use crate::registry::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(username: &str, address: &str) -> PeerRecord {
        PeerRecord {
            username: username.to_string(),
            address: address.to_string(),
        }
    }
}

/* equality and hashing are on the address alone */

impl PartialEq for PeerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for PeerRecord {}

impl Hash for PeerRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for PeerRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.username, self.address)
    }
}
