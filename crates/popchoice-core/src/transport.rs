//! RecommendationTransport trait definition.
//!
//! The boundary to the remote recommendation service. Implementations live
//! in popchoice-infra (e.g., `HttpRecommendationTransport`); tests use
//! in-memory mocks.

use popchoice_types::answers::AnswerSet;
use popchoice_types::error::RecommendError;
use popchoice_types::recommendation::RecommendationResult;

/// Trait for recommendation service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait RecommendationTransport: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Send one set of answers and wait for the best match.
    ///
    /// Callers must only pass ready answer sets; implementations do not
    /// re-validate. Exactly one round trip per call: no retries, no caching.
    fn recommend(
        &self,
        answers: &AnswerSet,
    ) -> impl std::future::Future<Output = Result<RecommendationResult, RecommendError>> + Send;
}
