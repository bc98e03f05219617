//! Request/response bodies exchanged with API clients.
//!
//! Field names follow the public API contract (snake_case). Every field is
//! optional on input; a missing field or an explicit `null` falls back to
//! its zero value.

use serde::{Deserialize, Deserializer};

pub mod datetime;
pub mod instance;
pub mod metadata;
pub mod policy;

pub use datetime::DateTime;
pub use instance::InstancePayload;
pub use metadata::MetadataPayload;
pub use policy::PreheatPolicyPayload;

/// Read `null` as the field's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
