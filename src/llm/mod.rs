//! Interview question generation with a hosted text model

pub mod config;
pub mod inference;
pub mod parser;
pub mod prompts;

pub use config::LlmConfig;
pub use inference::{GeminiGenerator, QuestionGenerator};
pub use parser::extract_questions;
pub use prompts::interview_prompt;
