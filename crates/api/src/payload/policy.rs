use preheat_core::types::DbId;
use serde::{Deserialize, Serialize};

use super::DateTime;

/// Preheat policy as sent to and received from clients.
///
/// `filters` and `trigger` are the JSON text forms, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreheatPolicyPayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: DbId,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub project_id: DbId,
    #[serde(deserialize_with = "super::null_as_default")]
    pub provider_id: DbId,
    #[serde(deserialize_with = "super::null_as_default")]
    pub filters: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub trigger: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    pub creation_time: DateTime,
    pub update_time: DateTime,
}
