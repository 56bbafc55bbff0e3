//! Chat transport: one `POST /api/chat` per accepted submission.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network error, non-2xx status, undecodable body) is a
//! [`TransportError`]. The session does not distinguish between them: any
//! error takes the conversation offline.
//!
//! No timeout is configured. A request the gateway never answers leaves the
//! conversation waiting.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tracing::debug;

use super::types::{ChatReply, ChatRequest, ErrorBody};

/// Path of the gateway endpoint the widget talks to.
pub const CHAT_ENDPOINT: &str = "/api/chat";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The gateway answered with a non-success status.
    #[error("server error {status}")]
    Status { status: u16, error: Option<String> },

    /// A success response whose body was not a chat reply.
    #[error("chat response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Sends one user message and returns the reply text.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`TransportError`] for any failed round trip.
    async fn send_message(&self, message: &str) -> Result<String, TransportError>;
}

/// [`ChatTransport`] over HTTP with reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Transport for the gateway at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client fails to
    /// build.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Transport reusing an existing reqwest client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self { http, endpoint: chat_endpoint(base_url) }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}{CHAT_ENDPOINT}", base_url.trim_end_matches('/'))
}

#[async_trait::async_trait]
impl ChatTransport for HttpTransport {
    async fn send_message(&self, message: &str) -> Result<String, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.json::<ErrorBody>().await.ok().map(|body| body.error);
            return Err(TransportError::Status { status: status.as_u16(), error });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        let text = reply.text.unwrap_or_default();
        debug!(reply_len = text.len(), "chat: reply received");
        Ok(text)
    }
}
