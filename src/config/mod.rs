//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! from TOML files. The same `config.toml` serves both binaries: the tracker
//! daemon reads the `tracker_config` and `tracker_server` sections, the peer
//! daemon reads `peer_config`.
//!
//! # Configuration Structure
//!
//! - **tracker_config**: account persistence files and save-retry knobs
//! - **tracker_server**: control-channel listener instances
//! - **peer_config**: tracker address, listen port, folders, chunk size
//!
//! # Example
//!
//! ```rust,ignore
//! use peerdex::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations (error kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
