use serde::{Deserialize, Serialize};

/// Provider metadata as listed to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataPayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub maintainers: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
}
