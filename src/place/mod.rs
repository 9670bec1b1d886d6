//! Place narrative module
//!
//! Turns a coordinate (plus an optional free-text note) into synthetic
//! narrative content:
//!
//! - [`classifier`]: coordinate bands → [`PlaceCategory`] and a place label
//! - [`narrative`]: per-category thematic threads and reflection prompts
//! - [`draft`]: single templated text block for a chosen thread
//! - [`analysis`]: assembles the response payloads served over HTTP
//!
//! All generators are pure functions and safe to call from any number of
//! concurrent handlers.

pub mod analysis;
pub mod classifier;
pub mod draft;
pub mod form;
pub mod handler;
pub mod narrative;

pub use analysis::{AnalysisRequest, AnalysisResult, DraftRequest, DraftResult, Uploads};
pub use classifier::{classify, place_label, PlaceCategory};
pub use draft::{compose, OutputType};
pub use handler::place_router;
pub use narrative::{generate_prompts, generate_threads, Aesthetic, SupportLevel, Thread};

/// Take at most `max` characters from `text` without splitting a character
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_ascii() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 80), "hello");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("maré alta", 4), "maré");
        assert_eq!(truncate_chars("東京の川", 2), "東京");
    }
}
