//! LLM: multi-provider adapter for text generation.
//!
//! DESIGN
//! ======
//! Uses environment variables instead of config files. The `LlmClient`
//! dispatches to Gemini, Anthropic or `OpenAI` based on `LLM_PROVIDER` and
//! exposes them all through the single [`TextGenerator`] interface.

pub mod anthropic;
pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::{LlmError, TextGenerator};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to the configured provider.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
    max_tokens: u32,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a value is malformed, or
    /// the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Like [`Self::from_env`], but a missing credential is `Ok(None)` so the
    /// gateway can start and answer generation requests with 500.
    ///
    /// # Errors
    ///
    /// Returns every other configuration or client build error.
    pub fn from_env_optional() -> Result<Option<Self>, LlmError> {
        match Self::from_env() {
            Ok(client) => Ok(Some(client)),
            Err(LlmError::MissingApiKey { var }) => {
                tracing::warn!(%var, "LLM credential not set, generation requests will fail");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = match config.provider {
            LlmProviderKind::Gemini => {
                LlmProvider::Gemini(gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?)
            }
            LlmProviderKind::Anthropic => LlmProvider::Anthropic(anthropic::AnthropicClient::new(
                config.api_key,
                config.base_url,
                config.timeouts,
            )?),
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.openai_mode,
                config.base_url,
                config.timeouts,
            )?),
        };
        Ok(Self { inner, model: config.model, max_tokens: config.max_tokens })
    }

    /// Return the configured model name (e.g. `"gemini-pro"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Return the short provider name used in logs.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        match &self.inner {
            LlmProvider::Gemini(_) => "gemini",
            LlmProvider::Anthropic(_) => "anthropic",
            LlmProvider::OpenAi(_) => "openai",
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.generate(&self.model, self.max_tokens, prompt).await,
            LlmProvider::Anthropic(c) => c.generate(&self.model, self.max_tokens, prompt).await,
            LlmProvider::OpenAi(c) => c.generate(&self.model, self.max_tokens, prompt).await,
        }
    }
}
