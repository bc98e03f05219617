//! Preheat policy <-> payload.

use preheat_core::error::{CoreError, CoreResult};
use preheat_core::models::encoded::Encoded;
use preheat_core::models::policy::Policy;
use preheat_core::naming;

use super::timestamp;
use crate::payload::PreheatPolicyPayload;

/// Project a stored policy into its payload. The text forms of filters and
/// trigger are copied as-is; their structured forms are ignored.
pub fn to_payload(policy: Option<&Policy>) -> CoreResult<PreheatPolicyPayload> {
    let policy = policy.ok_or(CoreError::NilInput { entity: "Policy" })?;

    Ok(PreheatPolicyPayload {
        id: policy.id,
        name: policy.name.clone(),
        description: policy.description.clone(),
        project_id: policy.project_id,
        provider_id: policy.provider_id,
        filters: policy.filters.text().to_string(),
        trigger: policy.trigger.text().to_string(),
        enabled: policy.enabled,
        creation_time: timestamp::to_wire(policy.created_at)?,
        update_time: timestamp::to_wire(policy.updated_at)?,
    })
}

/// Build a policy from a client payload. The resulting record carries only
/// the text forms of filters and trigger; call [`Policy::decode`] to parse
/// them.
pub fn to_domain(payload: Option<&PreheatPolicyPayload>) -> CoreResult<Policy> {
    let payload = payload.ok_or(CoreError::NilInput {
        entity: "PreheatPolicy",
    })?;
    naming::validate_name(&payload.name)?;

    Ok(Policy {
        id: payload.id,
        name: payload.name.clone(),
        description: payload.description.clone(),
        project_id: payload.project_id,
        provider_id: payload.provider_id,
        filters: Encoded::raw(payload.filters.as_str()),
        trigger: Encoded::raw(payload.trigger.as_str()),
        enabled: payload.enabled,
        created_at: timestamp::to_domain(payload.creation_time)?,
        updated_at: timestamp::to_domain(payload.update_time)?,
    })
}
