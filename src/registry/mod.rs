//! In-memory registry of connected peers and shared files.
//!
//! Pure runtime state: records appear on `REGISTER`/`SHARE` and disappear on
//! disconnect or `UNREGISTER`; nothing here is ever persisted.
//!
//! A single coarse lock guards both the peer list and the share index.
//! Contention is bounded by connection count, not by data volume, so
//! per-entry locking would buy nothing.

/// Registry data structures.
pub mod structs;

/// Implementation blocks for the registry.
pub mod impls;
