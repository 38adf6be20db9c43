//! Route handlers

use crate::gateway::{GenerationRequest, GenerationResponse};
use crate::server::store::StoredInterview;
use crate::server::{ApiError, ServerState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

const DEFAULT_LATEST_LIMIT: usize = 20;

/// Handler for `GET /api/chat`.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "success": true, "data": "Interview API is working!" }))
}

/// Handler for `POST /api/chat`.
pub async fn generate_handler(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("Received generation request: {:?}", request);

    if !request.missing_fields().is_empty() {
        return Err(ApiError::MissingFields(Box::new(request)));
    }

    let generated = state.service.generate(&request).await?;
    Ok(Json(GenerationResponse::succeeded(
        generated.interview_id,
        generated.questions_count,
    )))
}

#[derive(Serialize)]
pub struct InterviewResponse {
    pub success: bool,
    pub data: StoredInterview,
}

/// Handler for `GET /api/interviews/{id}`.
pub async fn interview_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<InterviewResponse>, ApiError> {
    let interview = state
        .store()
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Interview {} not found", id)))?;
    Ok(Json(InterviewResponse {
        success: true,
        data: interview,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuery {
    pub user_id: String,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct InterviewListResponse {
    pub success: bool,
    pub data: Vec<StoredInterview>,
}

/// Handler for `GET /api/interviews?userId=`.
pub async fn user_interviews_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<InterviewQuery>,
) -> Result<Json<InterviewListResponse>, ApiError> {
    let data = state.store().by_user(&query.user_id).await?;
    Ok(Json(InterviewListResponse {
        success: true,
        data,
    }))
}

/// Handler for `GET /api/interviews/latest?userId=&limit=`.
pub async fn latest_interviews_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<InterviewQuery>,
) -> Result<Json<InterviewListResponse>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LATEST_LIMIT);
    let data = state.store().latest(&query.user_id, limit).await?;
    Ok(Json(InterviewListResponse {
        success: true,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::QuestionGenerator;
    use crate::server::{router, GenerationService, MemoryStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt; // for oneshot

    struct StubGenerator;

    #[async_trait::async_trait]
    impl QuestionGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> crate::Result<String> {
            Ok("[\"Tell me about Go\", \"How do you index Postgres\"]".into())
        }
    }

    fn app() -> Router {
        let service = GenerationService::new(Arc::new(StubGenerator), Arc::new(MemoryStore::new()));
        router(Arc::new(ServerState::new(service)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn full_request() -> Value {
        json!({
            "type": "technical",
            "role": "backend engineer",
            "level": "senior",
            "techstack": "Go, Postgres",
            "amount": "2",
            "userid": "u1"
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/api/chat").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], "Interview API is working!");
    }

    #[tokio::test]
    async fn test_missing_fields_returns_400_with_received() {
        let mut body = full_request();
        body["level"] = json!("");
        let response = app().oneshot(post_chat(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing required fields");
        assert_eq!(json["received"]["role"], "backend engineer");
    }

    #[tokio::test]
    async fn test_generate_then_fetch() {
        let app = app();
        let response = app.clone().oneshot(post_chat(full_request())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["questionsCount"], 2);
        let id = json["interviewId"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/interviews/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["techstack"], json!(["Go", "Postgres"]));
        assert_eq!(json["data"]["userId"], "u1");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/interviews?userId=u1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/interviews/latest?userId=u1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_interview_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/interviews/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
