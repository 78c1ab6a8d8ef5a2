//! HTTP surface for the studio proxy
//!
//! A single `POST /api/gemini` action endpoint plus `/health`. The method
//! gate runs before the body is touched; validation failures map to 400 and
//! upstream failures to an opaque 500, with the real error kept in the
//! server log.

use crate::ai::GenerativeService;
use crate::dispatch;
use crate::models::{Action, Envelope};
use crate::Error;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared handler state: the upstream capability behind its trait.
#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<dyn GenerativeService>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error reply carrying one of the contract's failure statuses.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Single entry point for every studio action.
async fn invoke(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method != Method::POST {
        return Err(ApiError::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
        ));
    }

    let envelope: Envelope = serde_json::from_slice(&body).map_err(|e| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", e),
        )
    })?;

    let action = Action::from_envelope(envelope).map_err(|e| {
        if let Error::InvalidAction(tag) = &e {
            tracing::warn!("Rejected unknown action tag: {}", tag);
        }
        ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let tag = action.tag();
    tracing::debug!("[{}] Dispatching studio action", tag);

    match dispatch::dispatch(state.ai.as_ref(), action).await {
        Ok(outcome) => Ok(Json(outcome).into_response()),
        Err(e) => {
            // Upstream detail stays in the server log; the caller only ever
            // sees the opaque message.
            tracing::error!("[{}] Gemini request failed: {}", tag, e);
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Gemini request failed",
            ))
        }
    }
}

/// Build the studio router over any generative service implementation.
pub fn router(ai: Arc<dyn GenerativeService>) -> Router {
    Router::new()
        .route("/health", get(health))
        // All methods land on `invoke` so non-POST requests get the
        // contract's JSON 405 body instead of axum's bare rejection.
        .route("/api/gemini", any(invoke))
        .layer(CorsLayer::permissive())
        .with_state(AppState { ai })
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, ai: Arc<dyn GenerativeService>) -> crate::Result<()> {
    let app = router(ai);

    tracing::info!("AI Studio proxy listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
