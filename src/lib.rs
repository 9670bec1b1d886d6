//! Portal Backstage - place narrative prototype backend
//!
//! Accepts a geolocation plus optional media metadata and answers with
//! synthetic "place narrative" content: a place label, thematic threads,
//! reflection prompts and drafts. A small in-memory artifact store lets
//! clients keep what they produced for the lifetime of the process.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     HTTP surface (axum)                       │
//! │   /analyze   /draft        /artifact(s)        /health        │
//! └──────┬──────────┬──────────────┬─────────────────────────────┘
//!        │          │              │
//! ┌──────▼──────┐ ┌─▼───────────┐ ┌▼──────────────────────┐
//! │ Classifier  │ │ Draft       │ │ Artifact store        │
//! │ + Narrative │ │ composer    │ │ (RwLock, process-wide)│
//! └─────────────┘ └─────────────┘ └───────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`place`]: geo-classifier, narrative generator, draft composer and their handlers
//! - [`artifacts`]: in-memory artifact store and its handlers
//! - [`api`]: unified router with CORS and tracing
//! - [`server`]: listener lifecycle
//! - [`config`]: configuration management

pub mod api;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod place;
pub mod server;

pub use config::PortalConfig;
pub use error::{Error, Result};

/// Current UTC time as ISO-8601 with microseconds and a `Z` suffix
pub(crate) fn utc_now_iso() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_now_iso_format() {
        let ts = utc_now_iso();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000000Z".len());
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
