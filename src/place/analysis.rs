//! Request and response payloads for the place endpoints

use super::classifier::PlaceCategory;
use super::draft::compose;
use super::narrative::{generate_prompts, threads_for, Aesthetic, Thread};
use serde::{Deserialize, Serialize};

/// Filenames of the media parts attached to an analysis request.
///
/// Content is never kept; a part sent without a filename is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uploads {
    pub photo_names: Vec<Option<String>>,
    pub audio_name: Option<String>,
}

/// Input to [`AnalysisRequest::analyze`]
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub lat: f64,
    pub lon: f64,
    pub timestamp: Option<String>,
    pub note: String,
    pub uploads: Uploads,
}

/// Synthetic narrative for a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub place_label: String,
    pub threads: Vec<Thread>,
    pub reflection_prompts: Vec<String>,
    pub aesthetic: Aesthetic,
    pub uploads: Uploads,
    pub received_at: String,
    pub timestamp: Option<String>,
}

impl AnalysisRequest {
    /// Create a request for a coordinate with an empty note
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Default::default()
        }
    }

    /// Set the free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Classify the coordinate and assemble the full narrative
    pub fn analyze(self) -> AnalysisResult {
        let category = PlaceCategory::from_coords(self.lat, self.lon);
        tracing::debug!(
            category = %category,
            lat = self.lat,
            lon = self.lon,
            "Analyzing place"
        );

        AnalysisResult {
            place_label: category.label(self.lat, self.lon),
            threads: threads_for(category, &self.note),
            reflection_prompts: generate_prompts(self.lat, self.lon),
            aesthetic: Aesthetic::default_profile(),
            uploads: self.uploads,
            received_at: crate::utc_now_iso(),
            timestamp: self.timestamp,
        }
    }
}

/// Input to [`DraftRequest::compose`]
#[derive(Debug, Clone)]
pub struct DraftRequest {
    pub thread_title: String,
    pub output_type: String,
    pub note: String,
}

/// A composed draft, echoing the thread and output type it was built for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResult {
    pub draft: String,
    pub output_type: String,
    pub thread_title: String,
}

impl DraftRequest {
    /// Compose the draft text
    pub fn compose(self) -> DraftResult {
        DraftResult {
            draft: compose(&self.thread_title, &self.output_type, &self.note),
            output_type: self.output_type,
            thread_title: self.thread_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::narrative::OVERLAY_TITLE;

    #[test]
    fn test_analyze_river_band() {
        let result = AnalysisRequest::new(38.7, -9.1).with_note("low tide").analyze();
        assert_eq!(result.place_label, "Riverside bend near (38.700, -9.100)");
        assert_eq!(result.threads.len(), 3);
        assert_eq!(result.threads[2].title, OVERLAY_TITLE);
        assert!(result.threads[2].summary.contains("'low tide...'"));
        assert_eq!(result.reflection_prompts.len(), 3);
        assert_eq!(result.aesthetic, Aesthetic::default_profile());
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn test_analyze_passes_through_timestamp_and_uploads() {
        let request = AnalysisRequest {
            timestamp: Some("yesterday at dusk".to_string()),
            uploads: Uploads {
                photo_names: vec![Some("a.jpg".to_string())],
                audio_name: Some("wind.m4a".to_string()),
            },
            ..AnalysisRequest::new(50.0, 100.0)
        };
        let result = request.analyze();
        assert_eq!(result.timestamp.as_deref(), Some("yesterday at dusk"));
        assert_eq!(result.uploads.photo_names, vec![Some("a.jpg".to_string())]);
        assert_eq!(result.uploads.audio_name.as_deref(), Some("wind.m4a"));
    }

    #[test]
    fn test_received_at_is_utc_iso() {
        let result = AnalysisRequest::new(0.0, 0.0).analyze();
        assert!(result.received_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&result.received_at).is_ok());
    }

    #[test]
    fn test_analysis_serialization_shape() {
        let json = serde_json::to_value(AnalysisRequest::new(10.0, 5.0).analyze()).unwrap();
        assert_eq!(json["uploads"]["photo_names"], serde_json::json!([]));
        assert!(json["uploads"]["audio_name"].is_null());
        assert!(json["timestamp"].is_null());
        assert_eq!(json["aesthetic"]["mood"], "documentary-poetic");
        assert_eq!(json["threads"][0]["title"], "Salt wind archive");
    }

    #[test]
    fn test_draft_request_echoes_inputs() {
        let result = DraftRequest {
            thread_title: "Ship graffiti".to_string(),
            output_type: "postcard".to_string(),
            note: "rhymes".to_string(),
        }
        .compose();
        assert_eq!(result.thread_title, "Ship graffiti");
        assert_eq!(result.output_type, "postcard");
        assert!(result
            .draft
            .starts_with("Caption: From Ship graffiti, your note hints: rhymes"));
    }
}
