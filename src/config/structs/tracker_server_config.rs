use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerServerConfig {
    pub enabled: bool,
    pub bind_address: String,
}
