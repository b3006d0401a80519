use crate::domain::{CacheKey, Endpoint, TtlPolicy, UpstreamKind, UpstreamRequest, WeaponSummary};
use crate::ports::{CacheStore, UpstreamTransport};
use crate::resources::operation::ResourceOperations;
use crate::resources::params::{self, DEFAULT_LEADERBOARD_SIZE, DEFAULT_START_INDEX};
use crate::resources::shaping;
use crate::upstream::UpstreamHosts;
use async_trait::async_trait;
use serde_json::Value;
use shared::{Error, Region, Result};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Cache instances injected into the service, one per payload shape
#[derive(Clone)]
pub struct ResourceCaches {
    /// Keyed-API payloads; content, ranked and status share it with their own TTLs
    pub riot: Arc<dyn CacheStore<CacheKey, Value>>,
    /// Unfiltered skin lists, global or scoped to one weapon
    pub skins: Arc<dyn CacheStore<CacheKey, Vec<Value>>>,
    pub weapons: Arc<dyn CacheStore<CacheKey, Vec<WeaponSummary>>>,
}

/// Route-handler layer: resolves parameters, consults the caches and
/// falls back to the upstream transport on a miss
pub struct ResourceService {
    transport: Arc<dyn UpstreamTransport>,
    caches: ResourceCaches,
    hosts: UpstreamHosts,
    ttl: TtlPolicy,
    default_region: Region,
}

impl ResourceService {
    pub fn new(
        transport: Arc<dyn UpstreamTransport>,
        caches: ResourceCaches,
        hosts: UpstreamHosts,
        ttl: TtlPolicy,
        default_region: Region,
    ) -> Self {
        Self {
            transport,
            caches,
            hosts,
            ttl,
            default_region,
        }
    }

    fn region(&self, value: Option<&str>) -> Region {
        Region::resolve(params::supplied(value), self.default_region)
    }

    /// Cache lookup, then fetch + shape + store on a miss
    async fn cached<V, F>(
        &self,
        cache: &dyn CacheStore<CacheKey, V>,
        key: CacheKey,
        request: UpstreamRequest,
        shape: F,
    ) -> Result<V>
    where
        V: Clone + Send + 'static,
        F: FnOnce(Value) -> Result<V> + Send,
    {
        let ttl = self.ttl.ttl_for(key.endpoint);
        if let Some(hit) = cache.get(&key, ttl) {
            debug!("cache hit: {}", key);
            return Ok(hit);
        }
        debug!("cache miss: {}", key);

        let payload = self.fetch_json(key.endpoint, &request).await?;
        let value = shape(payload)?;
        cache.put(key, value.clone());
        Ok(value)
    }

    async fn fetch_json(&self, endpoint: Endpoint, request: &UpstreamRequest) -> Result<Value> {
        let response = self.transport.fetch(request).await.map_err(|err| {
            error!("{} request to {} failed: {}", endpoint, request.url, err);
            Error::from(err)
        })?;

        if !response.is_success() {
            warn!(
                "{} request to {} returned status {}",
                endpoint, request.url, response.status
            );
            return Err(Error::UpstreamStatus {
                code: endpoint.upstream_error_code(),
                status: response.status,
                body: response.text(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|err| {
            error!("{} payload from {} is not JSON: {}", endpoint, request.url, err);
            Error::InvalidPayload(err.to_string())
        })
    }

    fn single_weapon_request(&self, weapon_uuid: &str, language: &str) -> UpstreamRequest {
        UpstreamRequest::get(
            UpstreamKind::Cosmetic,
            self.hosts.cosmetic_url(&format!("/v1/weapons/{weapon_uuid}")),
        )
        .query("language", language)
    }
}

#[async_trait]
impl ResourceOperations for ResourceService {
    async fn content(&self, region: Option<&str>, locale: Option<&str>) -> Result<Value> {
        let region = self.region(region);
        let locale = params::language_or_default(locale);

        let key = CacheKey::new(Endpoint::Content, region.as_str()).scoped(locale);
        let request = UpstreamRequest::get(
            UpstreamKind::Riot,
            self.hosts.riot_url(region, "/val/content/v1/contents"),
        )
        .query("locale", locale);

        self.cached(self.caches.riot.as_ref(), key, request, Ok).await
    }

    async fn leaderboard(
        &self,
        act_id: Option<&str>,
        region: Option<&str>,
        size: Option<&str>,
        start_index: Option<&str>,
    ) -> Result<Value> {
        let act_id = params::required("actId", act_id)?;
        let act_id = params::identifier("actId", act_id)?;
        let size = params::number_or("size", size, DEFAULT_LEADERBOARD_SIZE)?;
        let start_index = params::number_or("startIndex", start_index, DEFAULT_START_INDEX)?;
        let region = self.region(region);

        let key = CacheKey::new(Endpoint::Leaderboard, region.as_str())
            .scoped(format!("{act_id}:{size}:{start_index}"));
        let request = UpstreamRequest::get(
            UpstreamKind::Riot,
            self.hosts
                .riot_url(region, &format!("/val/ranked/v1/leaderboards/by-act/{act_id}")),
        )
        .query("size", size)
        .query("startIndex", start_index);

        self.cached(
            self.caches.riot.as_ref(),
            key,
            request,
            shaping::normalize_players,
        )
        .await
    }

    async fn status(&self, region: Option<&str>) -> Result<Value> {
        let region = self.region(region);

        let key = CacheKey::new(Endpoint::Status, region.as_str());
        let request = UpstreamRequest::get(
            UpstreamKind::Riot,
            self.hosts.riot_url(region, "/val/status/v1/platform-data"),
        );

        self.cached(self.caches.riot.as_ref(), key, request, Ok).await
    }

    async fn skins(
        &self,
        language: Option<&str>,
        weapon_uuid: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Value>> {
        let language = params::language_or_default(language);

        let skins = match params::supplied(weapon_uuid) {
            Some(weapon_uuid) => {
                let weapon_uuid = params::identifier("weaponUuid", weapon_uuid)?;
                let key = CacheKey::new(Endpoint::Skins, language).scoped(weapon_uuid);
                let request = self.single_weapon_request(weapon_uuid, language);
                self.cached(self.caches.skins.as_ref(), key, request, |payload| {
                    Ok(shaping::weapon_skins(payload))
                })
                .await?
            }
            None => {
                let key = CacheKey::new(Endpoint::Skins, language);
                let request = UpstreamRequest::get(
                    UpstreamKind::Cosmetic,
                    self.hosts.cosmetic_url("/v1/weapons/skins"),
                )
                .query("language", language);
                self.cached(self.caches.skins.as_ref(), key, request, |payload| {
                    Ok(shaping::data_list(payload))
                })
                .await?
            }
        };

        // Filtering happens after the cache so every query shares one entry
        Ok(match params::supplied(query) {
            Some(query) => shaping::filter_by_display_name(&skins, query),
            None => skins,
        })
    }

    async fn weapons(&self, language: Option<&str>) -> Result<Vec<WeaponSummary>> {
        let language = params::language_or_default(language);

        let key = CacheKey::new(Endpoint::Weapons, language);
        let request = UpstreamRequest::get(
            UpstreamKind::Cosmetic,
            self.hosts.cosmetic_url("/v1/weapons"),
        )
        .query("language", language);

        self.cached(self.caches.weapons.as_ref(), key, request, |payload| {
            Ok(shaping::data_list(payload)
                .iter()
                .map(shaping::project_weapon)
                .collect())
        })
        .await
    }

    async fn weapon_skins(&self, weapon_uuid: &str, language: Option<&str>) -> Result<Vec<Value>> {
        let weapon_uuid = params::required("weaponUuid", Some(weapon_uuid))?;
        let weapon_uuid = params::identifier("weaponUuid", weapon_uuid)?;
        let language = params::language_or_default(language);

        let key = CacheKey::new(Endpoint::WeaponSkins, language).scoped(weapon_uuid);
        let request = self.single_weapon_request(weapon_uuid, language);

        self.cached(self.caches.skins.as_ref(), key, request, |payload| {
            Ok(shaping::weapon_skins(payload))
        })
        .await
    }
}
