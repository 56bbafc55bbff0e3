//! Google Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent`. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::LlmTimeouts;
use super::types::{LlmError, join_text};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<String, LlmError> {
        let body = ApiRequest {
            contents: [ApiContent { role: "user", parts: [ApiPartOut { text: prompt }] }],
            generation_config: GenerationConfig { max_output_tokens: max_tokens },
        };

        let response = self
            .http
            .post(self.model_url(model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        debug!(model, "gemini: response received");
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: [ApiContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ApiContent<'a> {
    role: &'a str,
    parts: [ApiPartOut<'a>; 1],
}

#[derive(Serialize)]
struct ApiPartOut<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ApiPartIn>,
}

#[derive(Deserialize)]
struct ApiPartIn {
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the text of the first candidate. A response with no candidates
/// (e.g. a blocked prompt) is an error; a candidate without text parts
/// yields an empty string.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(candidate) = api.candidates.into_iter().next() else {
        return Err(LlmError::ApiParse("gemini: response has no candidates".to_string()));
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    Ok(join_text(parts.into_iter().filter_map(|p| p.text)))
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
