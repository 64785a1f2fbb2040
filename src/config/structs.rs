//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker account-store settings (files, save retries).
pub mod tracker_config;

/// Control-channel listener instance configuration.
pub mod tracker_server_config;

/// Peer node configuration (tracker address, folders, transfer settings).
pub mod peer_config;
