use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::tracker_state::TrackerState;

fn apply(counter: &AtomicI64, value: i64)
{
    if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
    if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
}

impl TrackerState {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            sessions_active: self.stats.sessions_active.load(Ordering::SeqCst),
            logins_handled: self.stats.logins_handled.load(Ordering::SeqCst),
            signups_handled: self.stats.signups_handled.load(Ordering::SeqCst),
            searches_handled: self.stats.searches_handled.load(Ordering::SeqCst),
            shares_handled: self.stats.shares_handled.load(Ordering::SeqCst),
            peers_registered: self.stats.peers_registered.load(Ordering::SeqCst),
            files_indexed: self.stats.files_indexed.load(Ordering::SeqCst),
            force_disconnects: self.stats.force_disconnects.load(Ordering::SeqCst),
            persist_failures: self.stats.persist_failures.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        match event {
            StatsEvent::SessionsActive => apply(&self.stats.sessions_active, value),
            StatsEvent::LoginsHandled => apply(&self.stats.logins_handled, value),
            StatsEvent::SignupsHandled => apply(&self.stats.signups_handled, value),
            StatsEvent::SearchesHandled => apply(&self.stats.searches_handled, value),
            StatsEvent::SharesHandled => apply(&self.stats.shares_handled, value),
            StatsEvent::PeersRegistered => apply(&self.stats.peers_registered, value),
            StatsEvent::FilesIndexed => apply(&self.stats.files_indexed, value),
            StatsEvent::ForceDisconnects => apply(&self.stats.force_disconnects, value),
            StatsEvent::PersistFailures => apply(&self.stats.persist_failures, value),
        }
    }
}
