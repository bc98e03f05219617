//! Provider metadata -> payload.

use preheat_core::models::provider::{ProviderMetadata, ProviderRegistry};

use crate::payload::MetadataPayload;

impl From<ProviderMetadata> for MetadataPayload {
    fn from(m: ProviderMetadata) -> Self {
        Self {
            id: m.id,
            name: m.name,
            icon: m.icon,
            maintainers: m.maintainers,
            source: m.source,
            version: m.version,
        }
    }
}

/// Project provider descriptors one-to-one, preserving order.
pub fn to_payloads(providers: &[ProviderMetadata]) -> Vec<MetadataPayload> {
    providers.iter().cloned().map(MetadataPayload::from).collect()
}

/// List every provider the registry knows about, in payload shape.
pub fn list_payloads(registry: &dyn ProviderRegistry) -> Vec<MetadataPayload> {
    registry.list().into_iter().map(MetadataPayload::from).collect()
}
