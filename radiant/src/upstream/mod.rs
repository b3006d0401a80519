pub mod retry;

pub use retry::{RetryPolicy, RetryingTransport};

use shared::Region;

/// Base URLs of both upstreams; the keyed one is templated on `{region}`
#[derive(Clone, Debug)]
pub struct UpstreamHosts {
    riot_template: String,
    cosmetic_base: String,
}

impl UpstreamHosts {
    pub fn new(riot_template: impl Into<String>, cosmetic_base: impl Into<String>) -> Self {
        Self {
            riot_template: riot_template.into().trim_end_matches('/').to_string(),
            cosmetic_base: cosmetic_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn riot_url(&self, region: Region, path: &str) -> String {
        format!(
            "{}{}",
            self.riot_template.replace("{region}", region.as_str()),
            path
        )
    }

    pub fn cosmetic_url(&self, path: &str) -> String {
        format!("{}{}", self.cosmetic_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_riot_url_is_region_templated() {
        let hosts = UpstreamHosts::new("https://{region}.api.riotgames.com", "https://valorant-api.com/");
        assert_eq!(
            hosts.riot_url(Region::Kr, "/val/status/v1/platform-data"),
            "https://kr.api.riotgames.com/val/status/v1/platform-data"
        );
        assert_eq!(
            hosts.cosmetic_url("/v1/weapons"),
            "https://valorant-api.com/v1/weapons"
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        let hosts = UpstreamHosts::new("http://127.0.0.1:9000/", "http://127.0.0.1:9001");
        assert_eq!(
            hosts.riot_url(Region::Na, "/val/content/v1/contents"),
            "http://127.0.0.1:9000/val/content/v1/contents"
        );
    }
}
