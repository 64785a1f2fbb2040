//! Peer data structures.

/// The folder of locally shared files.
pub mod shared_folder;

/// The tracker-facing peer client.
pub mod peer_node;

/// Sequential fixed-chunk downloads from other peers.
pub mod chunked_download;
