//! Client side of the question-generation endpoint

pub mod client;
pub mod types;

pub use client::{GatewayClient, GatewayConfig};
pub use types::{GenerationOutcome, GenerationRequest, GenerationResponse, InterviewRecord};
