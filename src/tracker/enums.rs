//! Tracker enumerations.

/// Parsed control-protocol commands.
pub mod command;

/// Whether a session continues after a command.
pub mod session_flow;
