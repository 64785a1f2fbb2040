//! Implementation blocks for configuration types.

/// `Configuration` loading, saving and validation.
pub mod configuration;

/// `ConfigurationError` trait impls.
pub mod configuration_error;
