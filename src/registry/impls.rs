//! Implementation blocks for the registry.

/// `PeerRecord` address-only equality.
pub mod peer_record;

/// `PeerRegistry` operations.
pub mod peer_registry;
