//! HTTP client for the generation endpoint

use crate::gateway::types::{GenerationOutcome, GenerationRequest, GenerationResponse};
use crate::PrepError;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the gateway client
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Full URL of the generation endpoint
    pub endpoint: String,

    /// Overall request timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/api/chat".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GatewayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct GatewayClient {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PrepError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Submit the answers and classify the reply.
    ///
    /// Transport errors, unparseable bodies and `success: false` replies
    /// are all failures.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        info!(
            "Requesting {} questions for role '{}'",
            request.amount, request.role
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Gateway replied {}: {}", status, body);

        let parsed: GenerationResponse = serde_json::from_str(&body).map_err(|e| {
            PrepError::MalformedResponse(format!("status {}: {}", status, e))
        })?;

        if !parsed.success {
            let error = parsed
                .error
                .unwrap_or_else(|| format!("endpoint returned status {}", status));
            warn!("Generation failed: {}", error);
            return Err(PrepError::Generation(error));
        }

        Ok(parsed)
    }
}
