//! HTTP handlers for the place narrative API
//!
//! - POST /analyze — classify a coordinate and return threads, prompts, uploads
//! - POST /draft   — compose a draft text for one thread

use crate::error::Result;
use crate::place::analysis::{AnalysisRequest, AnalysisResult, DraftRequest, DraftResult, Uploads};
use crate::place::form::FormFields;
use axum::{extract::DefaultBodyLimit, routing::post, Json, Router};

/// Media parts recognized on `/analyze`, in response order
const PHOTO_FIELDS: [&str; 2] = ["photo1", "photo2"];
const AUDIO_FIELD: &str = "audio";

/// Create the place router. The generators are pure, so it carries no state.
pub fn place_router() -> Router {
    Router::new()
        // Upload bodies stream through without being buffered
        .route("/analyze", post(analyze).layer(DefaultBodyLimit::disable()))
        .route("/draft", post(draft))
}

/// POST /analyze
async fn analyze(form: FormFields) -> Result<Json<AnalysisResult>> {
    let request = AnalysisRequest {
        lat: form.required_f64("lat")?,
        lon: form.required_f64("lon")?,
        timestamp: form.text("timestamp").map(str::to_string),
        note: form.text_or_empty("note").to_string(),
        uploads: Uploads {
            photo_names: PHOTO_FIELDS
                .iter()
                .filter_map(|name| form.upload(name))
                .collect(),
            audio_name: form.upload(AUDIO_FIELD).flatten(),
        },
    };

    Ok(Json(request.analyze()))
}

/// POST /draft
async fn draft(form: FormFields) -> Result<Json<DraftResult>> {
    let request = DraftRequest {
        thread_title: form.required("thread_title")?.to_string(),
        output_type: form.required("output_type")?.to_string(),
        note: form.text_or_empty("note").to_string(),
    };

    Ok(Json(request.compose()))
}
