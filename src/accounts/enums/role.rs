use serde::{Deserialize, Serialize};

/// The role attached to an identity.
///
/// Exactly one `Administrator` identity exists per tracker; it is
/// synthesized at load time and never stored in the regular user table.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Role {
    Administrator,
    Regular,
}
