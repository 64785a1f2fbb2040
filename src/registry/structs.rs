//! Registry data structures.

/// A connected peer (identity plus network address).
pub mod peer_record;

/// One share-index entry (file name to offering peers).
pub mod file_entry;

/// The concurrency-guarded peer and file registry.
pub mod peer_registry;
