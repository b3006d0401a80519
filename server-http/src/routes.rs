use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use shared::config::Config;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build and configure the application router. Path normalization wraps the
/// router from the outside so it runs before route matching.
pub fn build_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        // Keyed game API
        .route("/content", get(handlers::content))
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/status", get(handlers::status))
        // Cosmetic catalog
        .route("/skins", get(handlers::skins))
        .route("/weapons", get(handlers::weapons))
        .route("/weapons/{weapon_uuid}/skins", get(handlers::weapon_skins));

    let router = Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        // Middleware
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
