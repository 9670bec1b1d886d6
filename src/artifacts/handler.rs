//! HTTP handlers for the Artifacts API
//!
//! - POST /artifact      — store an arbitrary JSON object
//! - GET  /artifacts     — list all artifacts in insertion order
//! - GET  /artifact/:id  — artifact detail

use crate::artifacts::store::{Artifact, ArtifactStore};
use crate::error::{Error, Result};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Shared state for artifact handlers
#[derive(Clone)]
pub struct ArtifactsState {
    pub store: Arc<ArtifactStore>,
}

/// Create the artifacts router
pub fn artifacts_router(state: ArtifactsState) -> Router {
    Router::new()
        .route("/artifact", post(save_artifact))
        .route("/artifacts", get(list_artifacts))
        .route("/artifact/:id", get(get_artifact))
        .with_state(state)
}

/// Response envelope for `GET /artifacts`
#[derive(Debug, Serialize)]
pub struct ArtifactList {
    pub items: Vec<Artifact>,
}

/// POST /artifact
async fn save_artifact(
    State(state): State<ArtifactsState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Artifact>> {
    let Json(payload) = payload.map_err(rejection_error)?;
    let Value::Object(record) = payload else {
        return Err(Error::InvalidInput(
            "body: input should be a JSON object".to_string(),
        ));
    };
    Ok(Json(state.store.add(record).await))
}

/// Body rejections answer with the crate's error envelope
fn rejection_error(rejection: JsonRejection) -> Error {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(rejection.body_text())
    } else {
        Error::InvalidInput(rejection.body_text())
    }
}

/// GET /artifacts
async fn list_artifacts(State(state): State<ArtifactsState>) -> Json<ArtifactList> {
    Json(ArtifactList {
        items: state.store.list().await,
    })
}

/// GET /artifact/:id
async fn get_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
) -> Result<Json<Artifact>> {
    state.store.get(&id).await.map(Json)
}
