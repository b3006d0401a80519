use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared_http::api::ErrorResponse;

/// Carries a domain error out of a handler as `{ "error", "detail" }`
#[derive(Debug)]
pub struct ApiError(pub shared::Error);

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = ErrorResponse {
            error: self.0.code().to_string(),
            detail: self.0.detail(),
        };

        (status, Json(body)).into_response()
    }
}
