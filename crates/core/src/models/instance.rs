//! Provider instance domain record.

use crate::auth_data::{self, AuthInfo};
use crate::error::CoreResult;
use crate::types::DbId;

/// Status label reported for an instance whose health is not known yet.
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const HEALTHY_STATUS: &str = "Healthy";
pub const UNHEALTHY_STATUS: &str = "Unhealthy";

/// Well-known auth modes. `auth_mode` is free text, these are not enforced.
pub mod auth_modes {
    pub const NONE: &str = "NONE";
    pub const BASIC: &str = "BASIC";
    pub const OAUTH: &str = "OAUTH";
    pub const CUSTOM: &str = "CUSTOM";
}

/// A configured connection to a preheat provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Provider id such as `dragonfly` or `kraken`.
    pub vendor: String,
    pub enabled: bool,
    pub endpoint: String,
    pub auth_mode: String,
    /// Serialized [`AuthInfo`]; see [`crate::auth_data`].
    pub auth_data: String,
    /// Empty until the instance has been health-checked.
    pub status: String,
    /// Marks the implicit default instance. Uniqueness is a storage concern.
    pub default: bool,
    pub insecure: bool,
    /// Epoch seconds.
    pub setup_timestamp: i64,
}

impl Instance {
    /// Decode `auth_data` into its typed form.
    pub fn auth_info(&self) -> CoreResult<AuthInfo> {
        auth_data::decode(&self.auth_data)
    }

    /// Replace `auth_data` with the serialized form of `info`.
    pub fn set_auth_info(&mut self, info: &AuthInfo) {
        self.auth_data = auth_data::encode(info);
    }
}
