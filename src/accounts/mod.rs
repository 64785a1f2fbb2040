//! Durable user accounts and transfer statistics.
//!
//! The account store owns two files: a flat user table
//! (`username,passwordHash,downloadFiles,downloadBytes,uploadFiles,uploadBytes`,
//! header first) and a sibling single-row statistics file for the built-in
//! administrator, which is never written to the main table.
//!
//! # Persistence
//!
//! Every full-table write goes to a temporary file first and is atomically
//! renamed over the live file. A failed rename is retried up to the
//! configured attempt count with linearly increasing backoff before the
//! error surfaces as fatal. Concurrent readers therefore always observe
//! either the fully-old or the fully-new table, never a partial write.
//!
//! # Credential hashing
//!
//! Hashing is pluggable through the [`traits::credential_hasher::CredentialHasher`]
//! seam; the shipped implementation is a salted SHA-256 digest.

/// Account enumerations (roles, errors).
pub mod enums;

/// Account data structures.
pub mod structs;

/// Implementation blocks for account types.
pub mod impls;

/// The pluggable credential hashing contract.
pub mod traits;

/// Unit tests for accounts and persistence.
pub mod tests;
