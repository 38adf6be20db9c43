use crate::dialogue::script::SetupKey;
use crate::{PrepError, Result};
use serde::{Deserialize, Serialize};

/// Interview parameters collected during the setup dialogue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupAnswers {
    pub role: String,
    pub level: String,
    pub techstack: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub amount: String,
}

impl SetupAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SetupKey) -> &str {
        match key {
            SetupKey::Role => &self.role,
            SetupKey::Level => &self.level,
            SetupKey::Techstack => &self.techstack,
            SetupKey::Type => &self.interview_type,
            SetupKey::Amount => &self.amount,
        }
    }

    fn slot_mut(&mut self, key: SetupKey) -> &mut String {
        match key {
            SetupKey::Role => &mut self.role,
            SetupKey::Level => &mut self.level,
            SetupKey::Techstack => &mut self.techstack,
            SetupKey::Type => &mut self.interview_type,
            SetupKey::Amount => &mut self.amount,
        }
    }

    /// Record the answer for `key`. Each key may be written once.
    pub fn record(&mut self, key: SetupKey, answer: &str) -> Result<()> {
        let slot = self.slot_mut(key);
        if !slot.is_empty() {
            return Err(PrepError::Validation(format!(
                "answer for '{}' already recorded",
                key.as_str()
            )));
        }
        *slot = answer.to_string();
        Ok(())
    }

    pub fn is_populated(&self, key: SetupKey) -> bool {
        !self.get(key).is_empty()
    }

    pub fn populated_count(&self) -> usize {
        SetupKey::ALL
            .iter()
            .filter(|key| self.is_populated(**key))
            .count()
    }

    /// Keys that are still empty
    pub fn missing(&self) -> Vec<SetupKey> {
        SetupKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.is_populated(*key))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}
