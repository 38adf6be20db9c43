//! Phase and call lifecycle enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the setup dialogue currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialoguePhase {
    /// Asking setup questions
    #[default]
    Setup,
    /// Waiting for the generation endpoint
    Generating,
    /// Terminal
    Finished,
}

/// Whether the interactive call is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallStatus {
    #[default]
    Inactive,
    Connecting,
    Active,
    Finished,
}

impl CallStatus {
    /// Whether a call may be started from this status. FINISHED is
    /// terminal, so only a fresh session can connect.
    pub fn can_start(&self) -> bool {
        matches!(self, CallStatus::Inactive)
    }
}

impl fmt::Display for DialoguePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialoguePhase::Setup => "SETUP",
            DialoguePhase::Generating => "GENERATING",
            DialoguePhase::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallStatus::Inactive => "INACTIVE",
            CallStatus::Connecting => "CONNECTING",
            CallStatus::Active => "ACTIVE",
            CallStatus::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_inactive_can_start() {
        assert!(CallStatus::Inactive.can_start());
        assert!(!CallStatus::Connecting.can_start());
        assert!(!CallStatus::Active.can_start());
        assert!(!CallStatus::Finished.can_start());
    }
}
