use crate::domain::WeaponSummary;
use async_trait::async_trait;
use serde_json::Value;
use shared::Result;

/// Resource-level operations behind the public `/api` routes.
/// Arguments are the raw, optional query values; resolution and defaults happen inside.
#[async_trait]
pub trait ResourceOperations: Send + Sync + 'static {
    async fn content(&self, region: Option<&str>, locale: Option<&str>) -> Result<Value>;

    async fn leaderboard(
        &self,
        act_id: Option<&str>,
        region: Option<&str>,
        size: Option<&str>,
        start_index: Option<&str>,
    ) -> Result<Value>;

    async fn status(&self, region: Option<&str>) -> Result<Value>;

    async fn skins(
        &self,
        language: Option<&str>,
        weapon_uuid: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Value>>;

    async fn weapons(&self, language: Option<&str>) -> Result<Vec<WeaponSummary>>;

    async fn weapon_skins(&self, weapon_uuid: &str, language: Option<&str>) -> Result<Vec<Value>>;
}
