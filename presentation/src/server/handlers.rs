use super::AppState;
use super::error::{ApiError, INVALID_BODY};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use deepthink_domain::{ChatReply, ChatRequest};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected chat request: {}", rejection.body_text());
        ApiError::bad_request(INVALID_BODY)
    })?;

    let reply = state.answer_query.execute(&request).await?;
    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use super::super::build_router;
    use super::*;
    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use deepthink_application::{AnswerQueryUseCase, SearchError, SearchGateway};
    use deepthink_domain::{InstantAnswer, RelatedTopic, SearchQuery, Topic};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct FixedGateway(Result<InstantAnswer, SearchError>);

    #[async_trait]
    impl SearchGateway for FixedGateway {
        async fn search(&self, _query: &SearchQuery) -> Result<InstantAnswer, SearchError> {
            self.0.clone()
        }
    }

    fn app(response: Result<InstantAnswer, SearchError>) -> Router {
        let use_case = AnswerQueryUseCase::new(Arc::new(FixedGateway(response)));
        build_router(AppState::new(use_case))
    }

    async fn post_chat(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Ok(InstantAnswer::default()))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_missing_user_message_is_400() {
        let body = json!({"messages": [{"role": "assistant", "content": "hi"}]});
        let (status, body) = post_chat(app(Ok(InstantAnswer::default())), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No user message supplied"}));
    }

    #[tokio::test]
    async fn test_empty_messages_is_400() {
        let (status, body) =
            post_chat(app(Ok(InstantAnswer::default())), json!({"messages": []}).to_string())
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No user message supplied");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let (status, body) = post_chat(app(Ok(InstantAnswer::default())), "{oops".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], INVALID_BODY);
    }

    #[tokio::test]
    async fn test_unknown_roles_are_tolerated() {
        let body = json!({"messages": [
            {"role": "tool", "content": "x"},
            {"role": "user", "content": "q"}
        ]});
        let (status, body) = post_chat(app(Ok(InstantAnswer::default())), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["reply"].as_str().unwrap().contains("«q»"));
    }

    #[tokio::test]
    async fn test_weather_reply() {
        let answer = InstantAnswer {
            abstract_text: "Weather is...".to_string(),
            abstract_url: "https://x".to_string(),
            ..Default::default()
        };
        let body = json!({"messages": [{"role": "user", "content": "weather"}]});
        let (status, body) = post_chat(app(Ok(answer)), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sources"].as_array().unwrap().len(), 1);
        assert_eq!(body["sources"][0]["url"], "https://x");
        assert!(body["reply"].as_str().unwrap().contains("1. Weather is..."));
        assert!(body["thoughts"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_nested_topics_are_sources() {
        let answer = InstantAnswer {
            related_topics: vec![
                RelatedTopic::Leaf(Topic::new("One", "https://1")),
                RelatedTopic::Group {
                    name: "Group".to_string(),
                    topics: vec![Topic::new("Two", "https://2")],
                },
            ],
            ..Default::default()
        };
        let body = json!({"messages": [{"role": "user", "content": "numbers"}]});
        let (_, body) = post_chat(app(Ok(answer)), body.to_string()).await;

        let urls: Vec<_> = body["sources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["url"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(urls, vec!["https://1", "https://2"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let body = json!({"messages": [{"role": "user", "content": "weather"}]});
        let (status, body) = post_chat(app(Err(SearchError::Status(503))), body.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to generate response"}));
    }
}
