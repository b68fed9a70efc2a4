//! Display formatting for a successful recommendation.
//!
//! Pure functions only: no I/O, no dependency on the lifecycle controller.

use serde::Serialize;

use popchoice_types::recommendation::RecommendationResult;

/// Separator between title and description inside `content`.
const CONTENT_DELIMITER: char = '|';

/// Display-ready values for a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub title: String,
    pub description: String,
    pub score_label: String,
}

/// Format a recommendation for display.
pub fn present(result: &RecommendationResult) -> Presentation {
    let (title, description) = split_content(&result.content);
    Presentation {
        title,
        description,
        score_label: score_label(result.similarity),
    }
}

/// Split `content` on the first `|` into a trimmed title and description.
///
/// Without a delimiter the whole string is the title and the description is
/// empty.
pub fn split_content(content: &str) -> (String, String) {
    match content.split_once(CONTENT_DELIMITER) {
        Some((title, description)) => (title.trim().to_string(), description.trim().to_string()),
        None => (content.trim().to_string(), String::new()),
    }
}

/// Render a similarity in `[0, 1]` as a percentage with one decimal, e.g. `87.3%`.
///
/// A negative zero renders as `0.0%`.
pub fn score_label(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0 + 0.0)
}
