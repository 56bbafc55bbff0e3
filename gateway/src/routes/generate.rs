//! Generation routes: `POST /api/generate` and `POST /api/chat`.
//!
//! Both endpoints run the same pipeline and differ only in the name of the
//! request field carrying the prompt. Bodies are parsed leniently: an
//! absent body, invalid JSON, a missing field or a non-string field all
//! degrade to "missing prompt" rather than an extractor rejection, so every
//! error the caller sees has the `{ "error": ... }` shape.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::generate::{self, GenerateError};
use crate::state::AppState;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: Option<String>,
}

/// Successful reply body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextReply {
    pub text: String,
}

/// Error reply body shared by every failure path.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingApiKey => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Missing API key"),
            Self::MissingPrompt { field } => error_response(StatusCode::BAD_REQUEST, missing_field_message(field)),
            Self::Provider(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "AI generation failed"),
        }
    }
}

/// `"prompt"` → `"Missing prompt"`.
fn missing_field_message(field: &str) -> String {
    format!("Missing {field}")
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/generate` with body `{ "prompt": string }`.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let prompt = serde_json::from_slice::<GenerateRequest>(&body)
        .ok()
        .and_then(|req| req.prompt);
    reply(&state, prompt.as_deref(), "prompt").await
}

/// `POST /api/chat` with body `{ "message": string }`. Used by the widget.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let message = serde_json::from_slice::<ChatRequest>(&body)
        .ok()
        .and_then(|req| req.message);
    reply(&state, message.as_deref(), "message").await
}

async fn reply(state: &AppState, prompt: Option<&str>, field: &'static str) -> Response {
    match generate::forward_prompt(state.generator.as_ref(), prompt, field).await {
        Ok(text) => (StatusCode::OK, Json(TextReply { text })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Any method other than `POST` on a generation endpoint.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
