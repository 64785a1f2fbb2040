//! Account data structures.

/// A user identity with role and transfer statistics.
pub mod identity;

/// Files/bytes transfer counters.
pub mod transfer_stats;

/// The durable account store.
pub mod account_store;

/// Salted SHA-256 credential hasher.
pub mod salted_sha256;
