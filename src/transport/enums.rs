//! Transport enumerations.

/// Errors raised by transport operations.
pub mod transport_error;
