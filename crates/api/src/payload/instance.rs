use preheat_core::auth_data::AuthInfo;
use preheat_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Provider instance as sent to and received from clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstancePayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: DbId,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vendor: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub endpoint: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub auth_mode: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub auth_info: AuthInfo,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub default: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub insecure: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub setup_timestamp: i64,
}
