#![deny(clippy::all)]

use crate::domain::{UpstreamRequest, UpstreamResult};
use async_trait::async_trait;
use std::time::Duration;

// Ports are the pluggable seams between the resource service and its adapters

/// Port for TTL-scoped response caching
pub trait CacheStore<K, V>: Send + Sync + 'static {
    /// Returns the value only while it is younger than `ttl`; stale entries read as absent
    fn get(&self, key: &K, ttl: Duration) -> Option<V>;

    /// Unconditionally replaces any entry for `key` and restarts its age
    fn put(&self, key: K, value: V);
}

/// Port for issuing GET requests against an upstream API
#[async_trait]
pub trait UpstreamTransport: Send + Sync + 'static {
    /// Non-2xx answers are `Ok`; only transport failures are `Err`
    async fn fetch(&self, request: &UpstreamRequest) -> UpstreamResult;
}
