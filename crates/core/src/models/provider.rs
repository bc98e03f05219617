//! Static metadata for supported preheat providers and the registry that
//! lists it.

/// Descriptive information about a preheat provider implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub maintainers: Vec<String>,
    pub source: String,
    pub version: String,
}

/// Source of provider metadata. Injected so tests can substitute fixtures.
pub trait ProviderRegistry: Send + Sync {
    fn list(&self) -> Vec<ProviderMetadata>;
}

/// The providers compiled into this build, sorted by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProviders;

impl ProviderRegistry for BuiltinProviders {
    fn list(&self) -> Vec<ProviderMetadata> {
        vec![
            ProviderMetadata {
                id: "dragonfly".to_string(),
                name: "Dragonfly".to_string(),
                icon: "https://raw.githubusercontent.com/alibaba/Dragonfly/master/docs/images/logo.png"
                    .to_string(),
                maintainers: vec!["Jin Zhang/taiyun.zj@alibaba-inc.com".to_string()],
                source: "https://github.com/alibaba/Dragonfly".to_string(),
                version: "0.10.1".to_string(),
            },
            ProviderMetadata {
                id: "kraken".to_string(),
                name: "Kraken".to_string(),
                icon: "https://github.com/uber/kraken/blob/master/assets/kraken-logo-color.svg"
                    .to_string(),
                maintainers: vec!["mmpei/peimingming@corp.netease.com".to_string()],
                source: "https://github.com/uber/kraken".to_string(),
                version: "0.1.3".to_string(),
            },
        ]
    }
}
