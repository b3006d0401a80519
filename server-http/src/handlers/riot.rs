use crate::error::ApiError;
use crate::state::AppState;
use crate::extract::ApiQuery;
use axum::{Json, extract::State};
use serde_json::Value;
use shared_http::api::{ContentQuery, LeaderboardQuery, StatusQuery};
use tracing::info;

/// GET /api/content?region=&locale=
pub async fn content(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ContentQuery>,
) -> Result<Json<Value>, ApiError> {
    info!("GET content: region={:?}, locale={:?}", query.region, query.locale);

    let payload = state
        .resources
        .content(query.region.as_deref(), query.locale.as_deref())
        .await?;

    Ok(Json(payload))
}

/// GET /api/leaderboard?actId=&region=&size=&startIndex=
pub async fn leaderboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LeaderboardQuery>,
) -> Result<Json<Value>, ApiError> {
    info!(
        "GET leaderboard: act={:?}, region={:?}, size={:?}, start={:?}",
        query.act_id, query.region, query.size, query.start_index
    );

    let payload = state
        .resources
        .leaderboard(
            query.act_id.as_deref(),
            query.region.as_deref(),
            query.size.as_deref(),
            query.start_index.as_deref(),
        )
        .await?;

    Ok(Json(payload))
}

/// GET /api/status?region=
pub async fn status(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> Result<Json<Value>, ApiError> {
    info!("GET status: region={:?}", query.region);

    let payload = state.resources.status(query.region.as_deref()).await?;
    Ok(Json(payload))
}
