use thiserror::Error;

use crate::answers::Question;

/// Errors from a single recommendation round trip.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The service answered with a non-success HTTP status.
    #[error("backend error (HTTP {status})")]
    Backend { status: u16 },

    /// The request never got a response (connection refused, timeout, ...).
    #[error("recommendation service unreachable: {0}")]
    Unreachable(String),

    /// The service answered 2xx but the body was not a valid result.
    #[error("malformed recommendation response: {0}")]
    Parse(String),
}

impl RecommendError {
    /// The message shown to the user when a request fails.
    ///
    /// Backend and parse failures read the same to the user; the detail is
    /// only logged.
    pub fn user_message(&self) -> String {
        match self {
            RecommendError::Backend { .. } | RecommendError::Parse(_) => {
                "Backend error: the recommendation service could not find a match. Please try again."
                    .to_string()
            }
            RecommendError::Unreachable(_) => {
                "Could not reach the recommendation service. Check your connection and try again."
                    .to_string()
            }
        }
    }
}

/// Why a submission was refused. Refusals are no-ops, not failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("answers are incomplete (missing: {})", list(.missing))]
    NotReady { missing: Vec<Question> },

    #[error("a request is already in flight")]
    InFlight,

    #[error("cannot submit from the {state} state; reset first")]
    NotAllowed { state: &'static str },
}

fn list(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors while resolving client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_error_display() {
        let err = RecommendError::Backend { status: 500 };
        assert_eq!(err.to_string(), "backend error (HTTP 500)");

        let err = RecommendError::Parse("missing field `content`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        for err in [
            RecommendError::Backend { status: 502 },
            RecommendError::Unreachable("connection refused".to_string()),
            RecommendError::Parse("eof".to_string()),
        ] {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_backend_and_parse_share_user_message() {
        assert_eq!(
            RecommendError::Backend { status: 500 }.user_message(),
            RecommendError::Parse("x".to_string()).user_message()
        );
    }

    #[test]
    fn test_submit_rejection_lists_missing_questions() {
        let err = SubmitRejection::NotReady {
            missing: vec![Question::Q1, Question::Q3],
        };
        assert_eq!(err.to_string(), "answers are incomplete (missing: q1, q3)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidBaseUrl {
            url: "ftp://x".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert!(err.to_string().contains("ftp://x"));
    }
}
