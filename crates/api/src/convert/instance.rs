//! Provider instance <-> payload.
//!
//! Status defaulting only happens outbound: an instance that was never
//! health-checked is reported as [`UNKNOWN_STATUS`], and that label is kept
//! if the payload comes back in.

use preheat_core::auth_data;
use preheat_core::error::{CoreError, CoreResult};
use preheat_core::models::instance::{Instance, UNKNOWN_STATUS};
use preheat_core::naming;

use crate::payload::InstancePayload;

/// Status label shown to clients for a stored status.
pub fn status_label(status: &str) -> &str {
    if status.is_empty() {
        UNKNOWN_STATUS
    } else {
        status
    }
}

pub fn to_payload(instance: Option<&Instance>) -> CoreResult<InstancePayload> {
    let instance = instance.ok_or(CoreError::NilInput { entity: "Instance" })?;
    let auth_info = auth_data::decode(&instance.auth_data)?;

    Ok(InstancePayload {
        id: instance.id,
        name: instance.name.clone(),
        description: instance.description.clone(),
        vendor: instance.vendor.clone(),
        enabled: instance.enabled,
        endpoint: instance.endpoint.clone(),
        auth_mode: instance.auth_mode.clone(),
        auth_info,
        status: status_label(&instance.status).to_string(),
        default: instance.default,
        insecure: instance.insecure,
        setup_timestamp: instance.setup_timestamp,
    })
}

pub fn to_domain(payload: Option<&InstancePayload>) -> CoreResult<Instance> {
    let payload = payload.ok_or(CoreError::NilInput { entity: "Instance" })?;
    naming::validate_name(&payload.name)?;

    Ok(Instance {
        id: payload.id,
        name: payload.name.clone(),
        description: payload.description.clone(),
        vendor: payload.vendor.clone(),
        enabled: payload.enabled,
        endpoint: payload.endpoint.clone(),
        auth_mode: payload.auth_mode.clone(),
        auth_data: auth_data::encode(&payload.auth_info),
        status: payload.status.clone(),
        default: payload.default,
        insecure: payload.insecure,
        setup_timestamp: payload.setup_timestamp,
    })
}
