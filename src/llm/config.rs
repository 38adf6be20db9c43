//! LLM configuration for the question generator

/// Configuration for the hosted text model
#[derive(Clone, Debug)]
pub struct LlmConfig {
    /// Model identifier
    pub model_id: String,

    /// Base URL of the generative language API
    pub base_url: String,

    /// API key; requests fail with a configuration error when absent
    pub api_key: Option<String>,

    /// Temperature for sampling (0.0 = deterministic, 1.0+ = creative)
    pub temperature: f32,

    /// Maximum tokens to generate per response
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model_id: "gemini-2.0-flash-001".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 2048,
        }
    }
}

impl LlmConfig {
    /// Create a new LLM configuration with the specified model
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the `generateContent` method for the configured model
    pub fn generate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/models/{}:generateContent", base, self.model_id)
    }
}
