use serde::{Deserialize, Serialize};

/// Two independent transfer counters.
///
/// One instance tracks downloads, a second one uploads. Serializes to
/// `"<count>,<bytes>"`; parsing is defensive and leaves prior values
/// unchanged on malformed input.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TransferStats {
    pub files: u64,
    pub bytes: u64,
}
