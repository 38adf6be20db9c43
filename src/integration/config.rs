//! Configuration for the integration layer
//!
//! Provides centralized configuration for all components, loaded from the
//! environment (and a `.env` file when present).

use crate::dialogue::DialogueConfig;
use crate::gateway::GatewayConfig;
use crate::llm::LlmConfig;
use crate::server::ServerConfig;
use crate::session::UserProfile;
use crate::speech::TextModeConfig;
use std::time::Duration;

pub const ENV_GATEWAY_URL: &str = "PREP_GATEWAY_URL";
pub const ENV_BIND_ADDR: &str = "PREP_BIND_ADDR";
pub const ENV_STORE_DIR: &str = "PREP_STORE_DIR";
pub const ENV_USER_ID: &str = "PREP_USER_ID";
pub const ENV_USER_NAME: &str = "PREP_USER_NAME";
pub const ENV_NO_RESPONSE_SECS: &str = "PREP_NO_RESPONSE_SECS";
pub const ENV_LLM_MODEL: &str = "PREP_LLM_MODEL";
pub const ENV_LLM_BASE_URL: &str = "PREP_LLM_BASE_URL";
pub const ENV_LLM_API_KEY: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

/// Configuration for the complete application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Dialogue timings
    pub dialogue: DialogueConfig,

    /// Generation endpoint used by the desktop client
    pub gateway: GatewayConfig,

    /// Generation server
    pub server: ServerConfig,

    /// Text model used by the server
    pub llm: LlmConfig,

    /// Text-mode speech pacing
    pub text_mode: TextModeConfig,

    /// The signed-in user
    pub user: UserProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dialogue: DialogueConfig::default(),
            gateway: GatewayConfig::default(),
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            text_mode: TextModeConfig::default(),
            user: UserProfile::new("local-user", "Candidate"),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read overrides from the environment
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_GATEWAY_URL) {
            config.gateway.endpoint = url;
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            config.server.bind_addr = addr
                .parse()
                .map_err(|e| format!("Invalid {}: {} ({})", ENV_BIND_ADDR, addr, e))?;
        }
        if let Some(dir) = lookup(ENV_STORE_DIR) {
            config.server.store_dir = dir.into();
        }
        if let Some(id) = lookup(ENV_USER_ID) {
            config.user.user_id = id;
        }
        if let Some(name) = lookup(ENV_USER_NAME) {
            config.user.user_name = name;
        }
        if let Some(secs) = lookup(ENV_NO_RESPONSE_SECS) {
            let secs: u64 = secs
                .parse()
                .map_err(|e| format!("Invalid {}: {} ({})", ENV_NO_RESPONSE_SECS, secs, e))?;
            config.dialogue.no_response_window = Duration::from_secs(secs);
        }
        if let Some(model) = lookup(ENV_LLM_MODEL) {
            config.llm.model_id = model;
        }
        if let Some(base) = lookup(ENV_LLM_BASE_URL) {
            config.llm.base_url = base;
        }
        config.llm.api_key = lookup(ENV_LLM_API_KEY).filter(|key| !key.is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Set the signed-in user
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = user;
        self
    }

    /// Set the dialogue configuration
    pub fn with_dialogue(mut self, dialogue: DialogueConfig) -> Self {
        self.dialogue = dialogue;
        self
    }

    /// Point the client at a different generation endpoint
    pub fn with_gateway_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.gateway.endpoint = endpoint.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.dialogue.validate()?;
        self.server.validate()?;

        if !self.gateway.endpoint.starts_with("http://")
            && !self.gateway.endpoint.starts_with("https://")
        {
            return Err(format!(
                "Gateway endpoint must be an http(s) URL: {}",
                self.gateway.endpoint
            ));
        }

        if self.user.user_id.trim().is_empty() {
            return Err("User id is required".to_string());
        }

        Ok(())
    }
}
