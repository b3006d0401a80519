use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Logical resources served by the proxy; the endpoint part of every cache key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Content,
    Leaderboard,
    Status,
    Skins,
    Weapons,
    WeaponSkins,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Content => "content",
            Endpoint::Leaderboard => "leaderboard",
            Endpoint::Status => "status",
            Endpoint::Skins => "skins",
            Endpoint::Weapons => "weapons",
            Endpoint::WeaponSkins => "weapon_skins",
        }
    }

    pub fn upstream(&self) -> UpstreamKind {
        match self {
            Endpoint::Content | Endpoint::Leaderboard | Endpoint::Status => UpstreamKind::Riot,
            Endpoint::Skins | Endpoint::Weapons | Endpoint::WeaponSkins => UpstreamKind::Cosmetic,
        }
    }

    /// Error code used when the upstream answers with a non-2xx status
    pub fn upstream_error_code(&self) -> &'static str {
        match self {
            Endpoint::Content | Endpoint::Leaderboard | Endpoint::Status => "upstream_error",
            Endpoint::Skins => "skins_upstream_error",
            Endpoint::Weapons => "weapons_upstream_error",
            Endpoint::WeaponSkins => "weapon_upstream_error",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies cache-equivalent requests. Only key-relevant parameters go in here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: Endpoint,
    /// Region or language
    pub selector: String,
    /// Sub-resource such as a weapon uuid or a leaderboard page
    pub scope: Option<String>,
}

impl CacheKey {
    pub fn new(endpoint: Endpoint, selector: impl Into<String>) -> Self {
        Self {
            endpoint,
            selector: selector.into(),
            scope: None,
        }
    }

    pub fn scoped(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}:{}:{}", self.endpoint, self.selector, scope),
            None => write!(f, "{}:{}", self.endpoint, self.selector),
        }
    }
}

/// Static per-endpoint time-to-live values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlPolicy {
    pub content: Duration,
    pub ranked: Duration,
    pub status: Duration,
    pub cosmetic: Duration,
}

impl TtlPolicy {
    pub fn ttl_for(&self, endpoint: Endpoint) -> Duration {
        match endpoint {
            Endpoint::Content => self.content,
            Endpoint::Leaderboard => self.ranked,
            Endpoint::Status => self.status,
            Endpoint::Skins | Endpoint::Weapons | Endpoint::WeaponSkins => self.cosmetic,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            content: Duration::from_secs(3600),
            ranked: Duration::from_secs(300),
            status: Duration::from_secs(60),
            cosmetic: Duration::from_secs(3600),
        }
    }
}

/// Which upstream a request targets. Only `Riot` carries credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamKind {
    Riot,
    Cosmetic,
}

/// A GET against one of the upstreams
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub kind: UpstreamKind,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Applies to each attempt separately
    pub timeout: Duration,
}

impl UpstreamRequest {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn get(kind: UpstreamKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            query: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }
}

/// Any upstream answer, 2xx or not
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Bytes,
    /// Parsed `Retry-After` header, delta-seconds form only
    pub retry_after: Option<Duration>,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
        }
    }

    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Other(String),
}

impl From<TransportError> for shared::Error {
    fn from(err: TransportError) -> Self {
        shared::Error::Transport(err.to_string())
    }
}

pub type UpstreamResult = Result<UpstreamResponse, TransportError>;

/// Weapon projection sent to the browser; no other upstream fields survive
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeaponSummary {
    #[serde(rename = "uuid")]
    pub identifier: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "displayIcon")]
    pub icon: Option<String>,
    pub category: Option<String>,
}
