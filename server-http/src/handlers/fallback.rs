use crate::error::ApiError;
use axum::extract::OriginalUri;

/// Unknown routes answer in the same `{ error, detail }` shape as everything else
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError(shared::Error::NotFound(uri.path().to_string()))
}
