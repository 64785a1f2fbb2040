//! Implementation blocks for tracker structs.

/// `TrackerState` construction.
pub mod tracker_state;

/// `ActiveSessions` operations.
pub mod active_sessions;

/// `SessionHandle` kick plumbing.
pub mod session_handle;

/// `Command` parsing.
pub mod command;

/// The `ClientSession` state machine.
pub mod client_session;
