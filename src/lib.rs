//! # Peerdex
//!
//! A Napster-style peer-to-peer file sharing platform: a central tracker
//! coordinates account identity, peer presence and a file-name-to-peer-set
//! index, while actual file bytes move directly between peers over a
//! separate transfer channel.
//!
//! ## Overview
//!
//! A peer node opens a control connection to the tracker, authenticates,
//! registers its listening address and announces its shared files. Other
//! peers query the tracker (search, list peers) over the same control
//! connection, then open a *direct* connection to the target peer's
//! transfer listener to fetch bytes. The tracker is never in the data path.
//!
//! ## Features
//!
//! - **Line-oriented control protocol**: one request per line, one reply
//!   per request, over TCP
//! - **Durable accounts**: flat-file user table with atomic-rename writes
//!   and per-identity transfer statistics
//! - **Single login enforcement**: at most one live control connection per
//!   identity, with administrative force-disconnect
//! - **Direct transfers**: whole-file byte streams between peers in fixed
//!   size chunks
//! - **Peer queries**: a datagram responder per peer for file listing and
//!   sizing with a receive timeout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use peerdex::config::structs::configuration::Configuration;
//! use peerdex::tracker::structs::tracker_state::TrackerState;
//!
//! // Load configuration from file
//! let config = Arc::new(Configuration::load_from_file(false)?);
//!
//! // Create the shared tracker state
//! let state = Arc::new(TrackerState::new(config));
//! state.accounts.load().await?;
//! ```
//!
//! ## Modules
//!
//! - [`accounts`] - Durable user records, credential hashing, statistics
//! - [`common`] - Shared utilities, error handling, logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`peer`] - Peer node: tracker client, transfer listener, query responder
//! - [`registry`] - In-memory peer and shared-file index
//! - [`stats`] - Runtime statistics tracking
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Control protocol engine and session handling
//! - [`transport`] - Line/byte channel over TCP and UDP

/// Durable user accounts module.
///
/// Contains the account store with its tolerant flat-file loader, the
/// atomic-rename persistence path and the pluggable credential hasher.
pub mod accounts;

/// Common utilities and shared functionality.
///
/// Contains logging setup, file classification for log output and the
/// plain-message error used by bootstrap code.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// for both the tracker and the peer binaries.
pub mod config;

/// Peer node module.
///
/// Contains the tracker-facing client, the transfer listener serving whole
/// file byte streams, the datagram query responder and the chunked
/// download implementation.
pub mod peer;

/// Peer and shared-file registry module.
///
/// Concurrency-guarded runtime index of connected peers and the files they
/// offer; nothing in here is persisted.
pub mod registry;

/// Runtime statistics module.
///
/// Atomic counters updated by every session and reported periodically on
/// the console.
pub mod stats;

/// CLI argument parsing.
///
/// Defines command-line options for the tracker binary.
pub mod structs;

/// Core tracker module.
///
/// Contains the shared tracker state, the active-session map, the command
/// parser and the per-connection protocol state machine.
pub mod tracker;

/// Transport module.
///
/// The line/byte channel abstraction with its connection-oriented and
/// datagram implementations.
pub mod transport;
