use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub sessions_active: AtomicI64,
    pub logins_handled: AtomicI64,
    pub signups_handled: AtomicI64,
    pub searches_handled: AtomicI64,
    pub shares_handled: AtomicI64,
    pub peers_registered: AtomicI64,
    pub files_indexed: AtomicI64,
    pub force_disconnects: AtomicI64,
    pub persist_failures: AtomicI64,
}
