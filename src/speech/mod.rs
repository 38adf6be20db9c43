//! Speech input/output for the setup dialogue
//!
//! This module provides:
//! - The `SpeechBackend` capability wrapping platform speech primitives
//! - `SpeechAdapter`, which enforces speak/listen mutual exclusion and
//!   filters recognition results down to final utterances
//! - A text-mode backend for the desktop client

pub mod adapter;
pub mod backend;
pub mod text_mode;

// Re-export commonly used types
pub use adapter::{AdapterEvent, SpeechAdapter};
pub use backend::{SpeechBackend, SpeechEvent, UtteranceId};
pub use text_mode::{TextModeConfig, TextModeSpeech};
