//! Unified API router for Portal Backstage
//!
//! Merges the module routers into a single axum `Router` with CORS and
//! request tracing.
//!
//! ## Endpoint Map
//!
//! | Path             | Module    | Description                        |
//! |------------------|-----------|------------------------------------|
//! | `/health`        | api       | Liveness check                     |
//! | `/analyze`       | place     | Place label, threads, prompts      |
//! | `/draft`         | place     | Draft text for one thread          |
//! | `/artifact`      | artifacts | Store an artifact                  |
//! | `/artifacts`     | artifacts | List artifacts                     |
//! | `/artifact/:id`  | artifacts | Artifact detail                    |

use crate::artifacts::{artifacts_router, ArtifactStore, ArtifactsState};
use crate::config::CorsConfig;
use crate::place::place_router;
use axum::{http::HeaderValue, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete Portal Backstage HTTP application
///
/// The store is constructed by the caller and lives as long as the returned
/// `Router` is being served.
pub fn build_app(store: Arc<ArtifactStore>, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(place_router())
        .merge(artifacts_router(ArtifactsState { store }))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(cors))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// CORS
// =============================================================================

/// An empty origin list mirrors the request origin, methods and headers so
/// credentials can still be allowed (a literal `*` cannot carry them).
fn build_cors(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials);

    if config.allowed_origins.is_empty() {
        cors.allow_origin(AllowOrigin::mirror_request())
    } else {
        let parsed: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(parsed)
    }
}
