//! Account traits.

/// The pluggable credential hashing strategy.
pub mod credential_hasher;
