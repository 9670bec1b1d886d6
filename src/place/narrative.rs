//! Narrative generator: thematic threads and reflection prompts
//!
//! Each [`PlaceCategory`] owns two fixed threads, looked up through
//! [`category_threads`].
//! Every response appends a third "Overlay of legends" thread that quotes the
//! caller's note.

use super::classifier::PlaceCategory;
use super::truncate_chars;
use serde::{Deserialize, Serialize};

/// Title of the note-dependent thread appended to every response
pub const OVERLAY_TITLE: &str = "Overlay of legends";

/// Characters of the note quoted in the overlay summary
pub const OVERLAY_NOTE_CHARS: usize = 80;

/// Verification questions shared by every thread
pub const VERIFY_QUESTIONS: [&str; 3] = [
    "Who else keeps records of this place?",
    "What photos or maps could confirm details?",
    "Which community voices are missing here?",
];

/// Confidence tag on a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Supported,
    Likely,
    Speculative,
}

/// A narrative fragment with a confidence label and verification hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub title: String,
    pub summary: String,
    pub support_level: SupportLevel,
    pub suggested_sources: Vec<String>,
    pub verify_questions: Vec<String>,
}

/// Static thread content bound to a category
#[derive(Debug, Clone, Copy)]
pub struct ThreadTemplate {
    pub title: &'static str,
    pub summary: &'static str,
    pub support_level: SupportLevel,
    pub suggested_sources: &'static [&'static str],
}

impl ThreadTemplate {
    fn to_thread(self) -> Thread {
        Thread {
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            support_level: self.support_level,
            suggested_sources: self.suggested_sources.iter().map(|s| s.to_string()).collect(),
            verify_questions: verify_questions(),
        }
    }
}

static RIVER_BAND_THREADS: [ThreadTemplate; 2] = [
    ThreadTemplate {
        title: "River trade and tides",
        summary: "Merchant rafts once drifted here; floods rewrote paths and stories.",
        support_level: SupportLevel::Supported,
        suggested_sources: &["Port records", "Oral histories", "Tide charts"],
    },
    ThreadTemplate {
        title: "Bridge rumors",
        summary: "Locals speak of a temporary bridge that appeared only at low tide.",
        support_level: SupportLevel::Likely,
        suggested_sources: &["Newspaper clippings", "Municipal minutes"],
    },
];

static COASTAL_THREADS: [ThreadTemplate; 2] = [
    ThreadTemplate {
        title: "Salt wind archive",
        summary: "Fisher cooperatives indexed storms with shells strung above doorways.",
        support_level: SupportLevel::Likely,
        suggested_sources: &["Family collections", "Weather logs"],
    },
    ThreadTemplate {
        title: "Ship graffiti",
        summary: "Hull markings carved by dockworkers doubled as secret navigation rhymes.",
        support_level: SupportLevel::Speculative,
        suggested_sources: &["Harbor walls", "Retired sailors"],
    },
];

static INLAND_THREADS: [ThreadTemplate; 2] = [
    ThreadTemplate {
        title: "Dry season crossings",
        summary: "Caravans cut through here when the marshes shrank; stones still mark the line.",
        support_level: SupportLevel::Supported,
        suggested_sources: &["Trail maps", "Satellite imagery"],
    },
    ThreadTemplate {
        title: "Songs against dust",
        summary: "Field choirs sang call-and-response to time irrigation releases.",
        support_level: SupportLevel::Likely,
        suggested_sources: &["Local elders", "Radio archives"],
    },
];

/// The two fixed threads for a category
pub fn category_threads(category: PlaceCategory) -> &'static [ThreadTemplate; 2] {
    match category {
        PlaceCategory::RiverBand => &RIVER_BAND_THREADS,
        PlaceCategory::Coastal => &COASTAL_THREADS,
        PlaceCategory::Inland => &INLAND_THREADS,
    }
}

fn verify_questions() -> Vec<String> {
    VERIFY_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Build the note-dependent overlay thread
pub fn overlay_thread(note: &str) -> Thread {
    Thread {
        title: OVERLAY_TITLE.to_string(),
        summary: format!(
            "A traveler wrote about this spot in a note: '{}...' and added their own myth.",
            truncate_chars(note, OVERLAY_NOTE_CHARS)
        ),
        support_level: SupportLevel::Speculative,
        suggested_sources: vec!["Personal journals".to_string(), "Community forums".to_string()],
        verify_questions: verify_questions(),
    }
}

/// Threads for a category: its two fixed threads, then the overlay
pub fn threads_for(category: PlaceCategory, note: &str) -> Vec<Thread> {
    let mut threads: Vec<Thread> = category_threads(category)
        .iter()
        .map(|t| t.to_thread())
        .collect();
    threads.push(overlay_thread(note));
    threads
}

/// Generate the ordered thread list for a coordinate and note
pub fn generate_threads(lat: f64, lon: f64, note: &str) -> Vec<Thread> {
    threads_for(PlaceCategory::from_coords(lat, lon), note)
}

/// Generate the three reflection prompts for a coordinate
pub fn generate_prompts(lat: f64, lon: f64) -> Vec<String> {
    vec![
        "What sounds did you hear that others might miss?".to_string(),
        "How does the light or fog change the story of this place?".to_string(),
        format!(
            "What would someone 50km away assume about ({:.2}, {:.2}) and how could you correct them?",
            lat, lon
        ),
    ]
}

/// Visual/tonal hints for rendering the narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aesthetic {
    pub mood: String,
    pub style_tokens: Vec<String>,
}

impl Aesthetic {
    /// The single aesthetic profile the prototype ships with
    pub fn default_profile() -> Self {
        Self {
            mood: "documentary-poetic".to_string(),
            style_tokens: ["grainy", "local", "unhurried"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
