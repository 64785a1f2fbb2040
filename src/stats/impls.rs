//! Statistics handling implementation blocks.

/// `update_stats`/`get_stats` on the tracker state.
pub mod tracker_state;
