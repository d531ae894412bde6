//! Configuration and per-provider defaults for OpenAI-compatible backends.
//!
//! Each provider that speaks the OpenAI chat completions protocol gets a
//! factory function returning an [`OpenAiCompatConfig`] with the correct
//! base URL. DeepSeek is the default backend; plain OpenAI is kept for
//! restaurants that already have a key there.

use secrecy::SecretString;

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "deepseek", "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.deepseek.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Default model identifier (e.g., "deepseek-chat").
    pub model: String,
}

/// DeepSeek default configuration.
///
/// Base URL: `https://api.deepseek.com/v1`
pub fn deepseek_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "deepseek".into(),
        base_url: "https://api.deepseek.com/v1".into(),
        api_key,
        model: model.into(),
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
        model: model.into(),
    }
}
