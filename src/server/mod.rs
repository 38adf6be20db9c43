//! HTTP side of interview generation
//!
//! `POST /api/chat` turns the collected setup answers into a stored
//! interview; the remaining routes read interviews back.

pub mod config;
pub mod handlers;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use service::{GeneratedInterview, GenerationService};
pub use store::{InterviewStore, JsonFileStore, MemoryStore, StoredInterview};

use crate::gateway::GenerationRequest;
use crate::PrepError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Shared state for all handlers
pub struct ServerState {
    pub service: GenerationService,
}

impl ServerState {
    pub fn new(service: GenerationService) -> Self {
        Self { service }
    }

    pub fn store(&self) -> &Arc<dyn InterviewStore> {
        self.service.store()
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/api/chat",
            get(handlers::health_handler).post(handlers::generate_handler),
        )
        .route("/api/interviews", get(handlers::user_interviews_handler))
        .route("/api/interviews/latest", get(handlers::latest_interviews_handler))
        .route("/api/interviews/{id}", get(handlers::interview_handler))
        .with_state(state)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields(Box<GenerationRequest>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<PrepError> for ApiError {
    fn from(e: PrepError) -> Self {
        match e {
            PrepError::Validation(msg) => ApiError::BadRequest(msg),
            PrepError::MalformedResponse(msg) => {
                ApiError::Internal(format!("Failed to parse generated questions: {}", msg))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::MissingFields(received) => serde_json::json!({
                "success": false,
                "error": self.to_string(),
                "received": received,
            }),
            _ => serde_json::json!({
                "success": false,
                "error": self.to_string(),
            }),
        };

        let status = match self {
            ApiError::MissingFields(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(msg) => {
                error!("Error generating interview: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(body)).into_response()
    }
}
