//! Wire types for the gateway's `/api/chat` endpoint.

use serde::{Deserialize, Serialize};

/// Request body sent by the widget.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Success body. A missing or `null` `text` reads as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub text: Option<String>,
}

/// Failure body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
