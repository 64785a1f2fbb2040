//! Runtime statistics tracking.
//!
//! Atomic counters updated from every session and read by the console
//! update task. These are process-lifetime metrics, unrelated to the
//! per-identity transfer statistics persisted by the account store.

/// Statistics event types.
pub mod enums;

/// Statistics data structures.
pub mod structs;

/// Statistics handling on the tracker state.
pub mod impls;
