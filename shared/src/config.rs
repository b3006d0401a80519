use crate::{Error, Region, Result};
use std::time::Duration;
use tracing::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub riot_api_key: String,
    pub default_region: Region,
    pub ttl_content: Duration,
    pub ttl_ranked: Duration,
    pub ttl_status: Duration,
    pub ttl_cosmetic: Duration,
    pub allowed_origins: Vec<String>,
    pub riot_base_url: String,
    pub cosmetic_base_url: String,
}

impl Config {
    const DEFAULT_HOST: &str = "127.0.0.1";
    const DEFAULT_PORT: u16 = 5001;
    const DEFAULT_TTL_CONTENT_SECS: u64 = 3600;
    const DEFAULT_TTL_RANKED_SECS: u64 = 300;
    const DEFAULT_TTL_STATUS_SECS: u64 = 60;
    pub const DEFAULT_RIOT_BASE_URL: &str = "https://{region}.api.riotgames.com";
    pub const DEFAULT_COSMETIC_BASE_URL: &str = "https://valorant-api.com";

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let riot_api_key = lookup("RIOT_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("RIOT_API_KEY is not set".to_string()))?;

        let default_region = match lookup("DEFAULT_REGION") {
            Some(raw) => Region::parse(&raw).unwrap_or_else(|| {
                warn!("DEFAULT_REGION '{}' is not supported, using '{}'", raw, Region::Br);
                Region::Br
            }),
            None => Region::Br,
        };

        let ttl_content = parse_or(&lookup, "CACHE_TTL_CONTENT", Self::DEFAULT_TTL_CONTENT_SECS);
        let ttl_ranked = parse_or(&lookup, "CACHE_TTL_RANKED", Self::DEFAULT_TTL_RANKED_SECS);
        let ttl_status = parse_or(&lookup, "CACHE_TTL_STATUS", Self::DEFAULT_TTL_STATUS_SECS);
        // Cosmetic data changes with game patches, same cadence as content
        let ttl_cosmetic = parse_or(&lookup, "CACHE_TTL_COSMETIC", ttl_content);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", Self::DEFAULT_PORT),
            riot_api_key,
            default_region,
            ttl_content: Duration::from_secs(ttl_content),
            ttl_ranked: Duration::from_secs(ttl_ranked),
            ttl_status: Duration::from_secs(ttl_status),
            ttl_cosmetic: Duration::from_secs(ttl_cosmetic),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            riot_base_url: lookup("RIOT_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_RIOT_BASE_URL.to_string()),
            cosmetic_base_url: lookup("COSMETIC_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_COSMETIC_BASE_URL.to_string()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("{} '{}' is not a valid number, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
