pub mod storage;
pub mod types;

pub use storage::TranscriptLog;
pub use types::{Speaker, TranscriptEntry};
