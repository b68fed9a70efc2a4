//! HttpRecommendationTransport -- concrete [`RecommendationTransport`] over HTTP.
//!
//! Sends the answer set as JSON to `POST {base_url}/recommend` and parses the
//! `{id, content, similarity}` response. The error body of a non-2xx response
//! is never interpreted.

use std::time::Duration;

use tracing::debug;

use popchoice_core::transport::RecommendationTransport;
use popchoice_types::answers::AnswerSet;
use popchoice_types::config::ClientConfig;
use popchoice_types::error::{ConfigError, RecommendError};
use popchoice_types::recommendation::RecommendationResult;

use crate::config::resolve_base_url;

pub struct HttpRecommendationTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationTransport {
    /// Path of the recommendation endpoint under the base URL.
    const RECOMMEND_PATH: &'static str = "/recommend";

    /// Build a transport from resolved configuration.
    ///
    /// The base URL is validated and normalized (no trailing slash).
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = resolve_base_url(&config.base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("popchoice/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl RecommendationTransport for HttpRecommendationTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn recommend(&self, answers: &AnswerSet) -> Result<RecommendationResult, RecommendError> {
        let url = self.url(Self::RECOMMEND_PATH);
        debug!(%url, "POST recommendation request");

        let response = self
            .client
            .post(&url)
            .json(answers)
            .send()
            .await
            .map_err(|e| RecommendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::Backend {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RecommendError::Unreachable(format!("failed to read response body: {e}")))?;

        let result: RecommendationResult = serde_json::from_slice(&body)
            .map_err(|e| RecommendError::Parse(e.to_string()))?;

        if !result.has_valid_similarity() {
            return Err(RecommendError::Parse(format!(
                "similarity {} is outside [0, 1]",
                result.similarity
            )));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use popchoice_types::answers::Question;

    type Received = Arc<Mutex<Vec<Value>>>;

    /// Serve `router` on an ephemeral local port and return its `/api` base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    /// A service that records request bodies and always answers with `reply`.
    async fn recording_service(status: StatusCode, reply: Value) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route(
                "/api/recommend",
                post(
                    move |State(received): State<Received>, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            received.lock().unwrap().push(body);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(received.clone());
        (serve(router).await, received)
    }

    fn transport(base_url: &str) -> HttpRecommendationTransport {
        HttpRecommendationTransport::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn answers() -> AnswerSet {
        AnswerSet::new()
            .with(Question::Q1, "Inception, loved the twist")
            .with(Question::Q2, "classic")
            .with(Question::Q3, "serious")
    }

    #[tokio::test]
    async fn test_recommend_posts_answers_and_parses_result() {
        let (base_url, received) = recording_service(
            StatusCode::OK,
            json!({"id": 1, "content": "Inception|mind-bending thriller", "similarity": 0.912}),
        )
        .await;

        let result = transport(&base_url).recommend(&answers()).await.unwrap();
        assert_eq!(result.id.to_string(), "1");
        assert_eq!(result.content, "Inception|mind-bending thriller");
        assert!((result.similarity - 0.912).abs() < f64::EPSILON);

        let bodies = received.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![json!({
                "q1": "Inception, loved the twist",
                "q2": "classic",
                "q3": "serious",
            })]
        );
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_ignored() {
        let (base_url, received) = recording_service(
            StatusCode::OK,
            json!({"id": "a", "content": "Heat", "similarity": 0.5}),
        )
        .await;

        let transport = transport(&format!("{base_url}/"));
        assert_eq!(transport.base_url(), base_url);
        transport.recommend(&answers()).await.unwrap();
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_backend_error() {
        let (base_url, received) = recording_service(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"detail": "vector search failed"}),
        )
        .await;

        let err = transport(&base_url).recommend(&answers()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Backend { status: 500 }));
        // One round trip, no retry.
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (base_url, _) =
            recording_service(StatusCode::OK, json!({"id": 1, "similarity": 0.4})).await;

        let err = transport(&base_url).recommend(&answers()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_similarity_is_parse_error() {
        let (base_url, _) = recording_service(
            StatusCode::OK,
            json!({"id": 1, "content": "Inception", "similarity": 1.7}),
        )
        .await;

        let err = transport(&base_url).recommend(&answers()).await.unwrap_err();
        match err {
            RecommendError::Parse(reason) => assert!(reason.contains("1.7")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_backend_error() {
        let router = Router::new();
        let base_url = serve(router).await;

        let err = transport(&base_url).recommend(&answers()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Backend { status: 404 }));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = transport(&format!("http://{addr}/api"))
            .recommend(&answers())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::Unreachable(_)));
    }

    #[test]
    fn test_from_config_rejects_invalid_base_url() {
        let result = HttpRecommendationTransport::from_config(&ClientConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
