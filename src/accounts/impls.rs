//! Implementation blocks for account types.

/// `Identity` helpers and row serialization.
pub mod identity;

/// `TransferStats` CSV serialization and defensive parsing.
pub mod transfer_stats;

/// `AccountStore` operations and atomic persistence.
pub mod account_store;

/// `SaltedSha256` hashing.
pub mod salted_sha256;
