//! Generate service: validated prompt → one provider call → text.
//!
//! DESIGN
//! ======
//! Route handlers extract the prompt from whatever body shape their endpoint
//! uses and hand it here. This module owns the check order (credential,
//! then prompt) and the single outbound call. No caching, rate limiting or
//! retry happens at this layer: each request costs exactly one
//! `generate_text` call or none at all.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::llm::{LlmError, TextGenerator};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The gateway started without a provider credential.
    #[error("LLM not configured")]
    MissingApiKey,
    /// The request carried no usable prompt under `field`.
    #[error("missing {field}")]
    MissingPrompt { field: &'static str },
    /// The provider call failed.
    #[error("LLM error: {0}")]
    Provider(#[from] LlmError),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Forward `prompt` to the provider and return the generated text.
///
/// `field` names the request field the prompt came from and is only used
/// for the missing-prompt error. An empty string counts as missing; any
/// other text, including whitespace, is forwarded verbatim.
///
/// # Errors
///
/// See [`GenerateError`]. The credential check runs before the prompt
/// check, so an unconfigured gateway reports `MissingApiKey` even for an
/// empty request.
pub async fn forward_prompt(
    generator: Option<&Arc<dyn TextGenerator>>,
    prompt: Option<&str>,
    field: &'static str,
) -> Result<String, GenerateError> {
    let Some(generator) = generator else {
        error!(field, "generate: no provider credential configured");
        return Err(GenerateError::MissingApiKey);
    };

    let Some(prompt) = prompt.filter(|p| !p.is_empty()) else {
        return Err(GenerateError::MissingPrompt { field });
    };

    info!(field, prompt_len = prompt.len(), "generate: prompt received");
    let started = Instant::now();

    match generator.generate_text(prompt).await {
        Ok(text) => {
            info!(
                field,
                reply_len = text.len(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "generate: reply ready"
            );
            Ok(text)
        }
        Err(e) => {
            error!(field, error = %e, code = e.error_code(), "generate: provider call failed");
            Err(GenerateError::Provider(e))
        }
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
