//! Codec between an instance's typed auth mapping and the serialized text
//! stored in its `auth_data` column.
//!
//! The text form is compact JSON with sorted keys. An empty mapping is
//! stored as the empty string rather than `{}`.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Typed auth credentials/config exposed on the wire.
pub type AuthInfo = BTreeMap<String, String>;

/// Serialize `info` into its stored text form.
pub fn encode(info: &AuthInfo) -> String {
    if info.is_empty() {
        return String::new();
    }
    serde_json::to_string(info).expect("string map always serializes")
}

/// Parse stored text back into an [`AuthInfo`].
///
/// `""` and `null` both yield an empty mapping. Anything else that is not a
/// JSON object of string values, whitespace included, fails with
/// [`CoreError::InvalidAuthData`].
pub fn decode(data: &str) -> CoreResult<AuthInfo> {
    if data.is_empty() {
        return Ok(AuthInfo::new());
    }
    serde_json::from_str::<Option<AuthInfo>>(data)
        .map(Option::unwrap_or_default)
        .map_err(|e| CoreError::InvalidAuthData(e.to_string()))
}
