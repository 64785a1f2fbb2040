use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::registry::structs::file_entry::FileEntry;
use crate::registry::structs::peer_record::PeerRecord;
use crate::registry::structs::peer_registry::{PeerRegistry, RegistryInner};

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerRegistry {
    pub fn new() -> PeerRegistry {
        PeerRegistry {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
        }
    }

    /// Inserts a peer unless a record with that address is already present.
    pub fn register_peer(&self, record: PeerRecord) -> bool
    {
        let mut inner = self.inner.write();
        if inner.peers.contains(&record) {
            return false;
        }
        debug!("[REGISTRY] Registered peer {record}");
        inner.peers.push(record);
        true
    }

    /// Removes the peer from the peer list and from every share entry;
    /// entries left with no peers are dropped on the spot.
    pub fn unregister_peer(&self, record: &PeerRecord)
    {
        let mut inner = self.inner.write();
        inner.peers.retain(|peer| peer != record);
        inner.shares.retain(|_, entry| {
            entry.peers.retain(|peer| peer != record);
            !entry.peers.is_empty()
        });
        debug!("[REGISTRY] Unregistered peer {record}");
    }

    /// Cascade for account removal: drops every record carrying `username`.
    pub fn purge_username(&self, username: &str)
    {
        let records: Vec<PeerRecord> = {
            let inner = self.inner.read();
            inner.peers.iter().filter(|peer| peer.username == username).cloned().collect()
        };
        for record in records {
            self.unregister_peer(&record);
        }
    }

    /// Adds the peer to the file's entry, creating the entry on first
    /// share. Re-sharing is a no-op (set semantics by address).
    pub fn share(&self, file_name: &str, record: PeerRecord)
    {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        let entry = inner.shares.entry(file_name.to_string()).or_insert_with(|| {
            let entry = FileEntry { peers: Vec::new(), added: inner.next_file_seq };
            inner.next_file_seq += 1;
            entry
        });
        if !entry.peers.contains(&record) {
            entry.peers.push(record);
        }
    }

    /// Case-insensitive substring search over file names.
    ///
    /// Results come back in first-seen file order with peers in insertion
    /// order; entries with no peers never appear.
    pub fn search(&self, term: &str) -> Vec<(String, Vec<PeerRecord>)>
    {
        let needle = term.to_lowercase();
        let inner = self.inner.read();
        let mut matches: Vec<(&String, &FileEntry)> = inner.shares.iter()
            .filter(|(name, entry)| !entry.peers.is_empty() && name.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by_key(|(_, entry)| entry.added);
        matches.into_iter()
            .map(|(name, entry)| (name.clone(), entry.peers.clone()))
            .collect()
    }

    pub fn list_peers(&self) -> Vec<PeerRecord> {
        self.inner.read().peers.clone()
    }

    pub fn peer_count(&self) -> usize {
        self.inner.read().peers.len()
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().shares.len()
    }
}
