//! Peer enumerations.

/// Errors raised by peer operations.
pub mod peer_error;
