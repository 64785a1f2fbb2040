//! Core tracker implementation.
//!
//! The tracker accepts control connections, runs one [`ClientSession`]
//! state machine per connection and keeps the shared state in a single
//! [`TrackerState`] that is constructed once and injected into every
//! session. No file bytes ever pass through here; peers exchange those
//! directly.
//!
//! # Main Components
//!
//! - `TrackerState` - account store, peer registry, active sessions, stats
//! - `ActiveSessions` - one live control connection per identity
//! - `Command` - parsed control-protocol requests
//! - `ClientSession` - the per-connection protocol state machine
//!
//! [`ClientSession`]: structs::client_session::ClientSession
//! [`TrackerState`]: structs::tracker_state::TrackerState

/// Enumerations for tracker operations.
pub mod enums;

/// Data structures for tracker operations.
pub mod structs;

/// Implementation blocks for tracker structs.
pub mod impls;

/// The control-channel accept loop.
#[allow(clippy::module_inception)]
pub mod tracker;
