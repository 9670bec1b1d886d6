//! Draft composer: one templated text block per thread

use super::truncate_chars;

/// Characters of the note quoted in a draft
pub const DRAFT_NOTE_CHARS: usize = 100;

/// Fixed three-step score used for any unrecognized output type
pub const SCORE_TEXT: &str = "Score: (1) Map a path with footsteps, pause at every third stride. \
(2) Whisper the place name and your note. \
(3) Offer a gesture toward the nearest landmark.";

/// Kind of draft requested by the caller
///
/// Matching is exact and case-sensitive; anything other than `micro-story`
/// or `postcard` falls through to [`OutputType::Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    MicroStory,
    Postcard,
    Score,
}

impl From<&str> for OutputType {
    fn from(s: &str) -> Self {
        match s {
            "micro-story" => Self::MicroStory,
            "postcard" => Self::Postcard,
            _ => Self::Score,
        }
    }
}

/// Compose a draft for `thread_title` in the requested `output_type`
pub fn compose(thread_title: &str, output_type: &str, note: &str) -> String {
    let base = format!(
        "From {}, your note hints: {}",
        thread_title,
        truncate_chars(note, DRAFT_NOTE_CHARS)
    );

    match OutputType::from(output_type) {
        OutputType::MicroStory => format!(
            "{}. A passerby pauses as wind drags the scent of metal and salt. \
             Layers of rumor and record fold together in 140 words of compressed time.",
            base
        ),
        OutputType::Postcard => format!(
            "Caption: {}. Source note: drafted by the Portal AI backstage, please verify locally.",
            base
        ),
        OutputType::Score => SCORE_TEXT.to_string(),
    }
}
