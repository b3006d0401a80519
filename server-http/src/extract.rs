use crate::error::ApiError;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use shared_http::api::QueryParams;

/// Query extractor that never answers with axum's plain-text rejection.
/// Repeated parameters keep their first value.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: From<QueryParams>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|rejection| {
            ApiError(shared::Error::InvalidParam {
                name: "query",
                value: rejection.body_text(),
            })
        })?;

        Ok(Self(T::from(QueryParams::new(pairs))))
    }
}

/// Single path segment; decoding failures become `invalid_param`
#[derive(Debug)]
pub struct ApiPath(pub String);

impl<S> FromRequestParts<S> for ApiPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError(shared::Error::InvalidParam {
                    name: "path",
                    value: rejection.body_text(),
                })
            })?;

        Ok(Self(segment))
    }
}
