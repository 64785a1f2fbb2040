//! Account enumerations.

/// Account roles.
pub mod role;

/// Errors raised by account operations.
pub mod account_error;
