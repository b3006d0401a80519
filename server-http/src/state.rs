use radiant::domain::TtlPolicy;
use radiant::ports::UpstreamTransport;
use radiant::upstream::{RetryingTransport, UpstreamHosts};
use radiant::{Clock, ResourceCaches, ResourceOperations, ResourceService};
use shared::config::Config;
use std::sync::Arc;
use storage_engine::TtlCache;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resources: Arc<dyn ResourceOperations>,
}

impl AppState {
    pub fn new(resources: Arc<dyn ResourceOperations>) -> Self {
        Self { resources }
    }

    /// Wire the resource service from configuration. `transport` performs single
    /// attempts; retries and caching are layered on here.
    pub fn from_config(
        config: &Config,
        transport: Arc<dyn UpstreamTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let retrying = Arc::new(RetryingTransport::new(transport, clock.clone()));

        let caches = ResourceCaches {
            riot: Arc::new(TtlCache::new("riot", clock.clone())),
            skins: Arc::new(TtlCache::new("skins", clock.clone())),
            weapons: Arc::new(TtlCache::new("weapons", clock)),
        };

        let ttl = TtlPolicy {
            content: config.ttl_content,
            ranked: config.ttl_ranked,
            status: config.ttl_status,
            cosmetic: config.ttl_cosmetic,
        };

        let hosts = UpstreamHosts::new(&config.riot_base_url, &config.cosmetic_base_url);

        tracing::info!(
            "Resource service ready: default region={}, ttl content={:?} ranked={:?} status={:?} cosmetic={:?}",
            config.default_region,
            ttl.content,
            ttl.ranked,
            ttl.status,
            ttl.cosmetic
        );

        Self::new(Arc::new(ResourceService::new(
            retrying,
            caches,
            hosts,
            ttl,
            config.default_region,
        )))
    }
}
