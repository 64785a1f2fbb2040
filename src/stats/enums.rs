//! Statistics enumerations.

/// Events fed into `TrackerState::update_stats`.
pub mod stats_event;
