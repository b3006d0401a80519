use radiant::domain::WeaponSummary;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Body of every non-2xx answer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable code, e.g. `missing_param` or `upstream_error`
    pub error: String,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct SkinsResponse {
    pub skins: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct WeaponsResponse {
    pub weapons: Vec<WeaponSummary>,
}
