//! End-to-end integration module
//!
//! This module provides the orchestration layer that connects the setup
//! dialogue to speech, timers and the generation gateway.

mod config;
mod orchestrator;

pub use config::AppConfig;
pub use orchestrator::{
    Orchestrator, OrchestratorCommand, OrchestratorEvent, OrchestratorHandle, SessionSnapshot,
};
