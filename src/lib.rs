pub mod dialogue;
pub mod gateway;
pub mod integration;
pub mod llm;
pub mod messages;
pub mod server;
pub mod session;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PrepError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Recognition error: {0}")]
    Recognition(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    IO(String),
}

impl From<std::io::Error> for PrepError {
    fn from(e: std::io::Error) -> Self {
        PrepError::IO(e.to_string())
    }
}

impl From<reqwest::Error> for PrepError {
    fn from(e: reqwest::Error) -> Self {
        PrepError::Gateway(e.to_string())
    }
}

impl From<serde_json::Error> for PrepError {
    fn from(e: serde_json::Error) -> Self {
        PrepError::MalformedResponse(e.to_string())
    }
}

impl PrepError {
    /// Check if this error is recoverable within the current session
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The no-response timer re-asks the question
            PrepError::Recognition(_) => true,
            PrepError::Speech(_) => true,
            // Generation failures end the session
            PrepError::Generation(_) => false,
            PrepError::Gateway(_) => false,
            PrepError::MalformedResponse(_) => false,
            PrepError::Storage(_) => false,
            PrepError::Config(_) => false,
            PrepError::Channel(_) => false,
            PrepError::Validation(_) => false,
            PrepError::IO(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            PrepError::Speech(_) => "Speech playback failed. The question is shown as text.".to_string(),
            PrepError::Recognition(_) => {
                "Speech recognition failed. Please answer again.".to_string()
            }
            PrepError::Generation(_) | PrepError::Gateway(_) | PrepError::MalformedResponse(_) => {
                "There was an error generating your interview questions. Please try again."
                    .to_string()
            }
            PrepError::Storage(_) => "Failed to save the interview.".to_string(),
            PrepError::Config(_) => "Configuration error. Please check settings.".to_string(),
            PrepError::Channel(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
            PrepError::Validation(_) => "Some interview details are missing.".to_string(),
            PrepError::IO(_) => "File system error occurred.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
