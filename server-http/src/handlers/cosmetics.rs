use crate::error::ApiError;
use crate::state::AppState;
use crate::extract::{ApiPath, ApiQuery};
use axum::{Json, extract::State};
use shared_http::api::{LanguageQuery, SkinsQuery, SkinsResponse, WeaponsResponse};
use tracing::info;

/// GET /api/skins?language=&weaponUuid=&q=
pub async fn skins(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SkinsQuery>,
) -> Result<Json<SkinsResponse>, ApiError> {
    info!(
        "GET skins: language={:?}, weapon={:?}, q={:?}",
        query.language, query.weapon_uuid, query.q
    );

    let skins = state
        .resources
        .skins(
            query.language.as_deref(),
            query.weapon_uuid.as_deref(),
            query.q.as_deref(),
        )
        .await?;

    Ok(Json(SkinsResponse { skins }))
}

/// GET /api/weapons?language=
pub async fn weapons(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<WeaponsResponse>, ApiError> {
    info!("GET weapons: language={:?}", query.language);

    let weapons = state.resources.weapons(query.language.as_deref()).await?;
    Ok(Json(WeaponsResponse { weapons }))
}

/// GET /api/weapons/{weapon_uuid}/skins?language=
pub async fn weapon_skins(
    State(state): State<AppState>,
    ApiPath(weapon_uuid): ApiPath,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<SkinsResponse>, ApiError> {
    info!("GET weapon skins: weapon={}, language={:?}", weapon_uuid, query.language);

    let skins = state
        .resources
        .weapon_skins(&weapon_uuid, query.language.as_deref())
        .await?;

    Ok(Json(SkinsResponse { skins }))
}
