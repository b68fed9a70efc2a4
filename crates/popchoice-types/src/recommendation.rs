use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque identifier of a recommended item.
///
/// The service is free to use numbers, strings, or anything else, so the raw
/// JSON value is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationId(pub serde_json::Value);

impl fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

/// The best match returned by the recommendation service.
///
/// `content` may carry a title and description separated by `|`.
/// `similarity` is a match confidence in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub id: RecommendationId,
    pub content: String,
    pub similarity: f64,
}

impl RecommendationResult {
    /// Whether `similarity` is a finite number within `[0.0, 1.0]`.
    pub fn has_valid_similarity(&self) -> bool {
        self.similarity.is_finite() && (0.0..=1.0).contains(&self.similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_id() {
        let result: RecommendationResult = serde_json::from_str(
            r#"{"id": 1, "content": "Inception|mind-bending thriller", "similarity": 0.912}"#,
        )
        .unwrap();
        assert_eq!(result.id.to_string(), "1");
        assert_eq!(result.content, "Inception|mind-bending thriller");
        assert!((result.similarity - 0.912).abs() < f64::EPSILON);
        assert!(result.has_valid_similarity());
    }

    #[test]
    fn test_deserialize_string_id_displays_unquoted() {
        let result: RecommendationResult =
            serde_json::from_str(r#"{"id": "tt1375666", "content": "Inception", "similarity": 1}"#)
                .unwrap();
        assert_eq!(result.id.to_string(), "tt1375666");
        assert!(result.has_valid_similarity());
    }

    #[test]
    fn test_missing_content_fails() {
        let parsed: Result<RecommendationResult, _> =
            serde_json::from_str(r#"{"id": 1, "similarity": 0.5}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_similarity_bounds() {
        let mut result = RecommendationResult {
            id: RecommendationId(serde_json::json!(7)),
            content: "Heat".to_string(),
            similarity: 0.0,
        };
        assert!(result.has_valid_similarity());
        result.similarity = 1.0;
        assert!(result.has_valid_similarity());
        result.similarity = 1.01;
        assert!(!result.has_valid_similarity());
        result.similarity = -0.1;
        assert!(!result.has_valid_similarity());
        result.similarity = f64::NAN;
        assert!(!result.has_valid_similarity());
    }
}
