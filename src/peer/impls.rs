//! Implementation blocks for peer types.

/// `SharedFolder` listing and resolution.
pub mod shared_folder;

/// `PeerNode` control-channel calls.
pub mod peer_node;

/// `ChunkedDownload` streaming copy.
pub mod chunked_download;
