//! The fixed list of setup questions and the phrases spoken around them

use crate::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const REASK_PREFIX: &str = "I didn't hear your response. Let me ask again: ";

pub const GENERATING_ANNOUNCEMENT: &str = "Thank you! I'm now generating your interview questions. Please wait a moment while I prepare everything for you.";

pub const SUCCESS_ANNOUNCEMENT: &str = "Perfect! Your interview questions have been generated and saved. You'll now be redirected to the home page where you can start your actual interview.";

pub const FAILURE_ANNOUNCEMENT: &str =
    "I'm sorry, there was an error generating your interview questions. Please try again.";

/// The interview parameter an answer fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupKey {
    Role,
    Level,
    Techstack,
    Type,
    Amount,
}

impl SetupKey {
    pub const ALL: [SetupKey; 5] = [
        SetupKey::Role,
        SetupKey::Level,
        SetupKey::Techstack,
        SetupKey::Type,
        SetupKey::Amount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetupKey::Role => "role",
            SetupKey::Level => "level",
            SetupKey::Techstack => "techstack",
            SetupKey::Type => "type",
            SetupKey::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupQuestion {
    pub prompt: String,
    /// `None` for the readiness confirmation
    pub key: Option<SetupKey>,
}

impl SetupQuestion {
    pub fn new(prompt: impl Into<String>, key: Option<SetupKey>) -> Self {
        Self {
            prompt: prompt.into(),
            key,
        }
    }
}

/// Ordered setup questions
#[derive(Debug, Clone)]
pub struct SetupScript {
    questions: Vec<SetupQuestion>,
}

impl SetupScript {
    /// Build a script from custom questions.
    ///
    /// The first question must be a readiness confirmation without a key,
    /// and no key may be asked twice.
    pub fn new(questions: Vec<SetupQuestion>) -> Result<Self> {
        match questions.first() {
            None => return Err(PrepError::Validation("setup script is empty".into())),
            Some(first) if first.key.is_some() => {
                return Err(PrepError::Validation(
                    "first setup question must not collect an answer".into(),
                ))
            }
            _ => {}
        }

        let mut seen = HashSet::new();
        for key in questions.iter().filter_map(|q| q.key) {
            if !seen.insert(key) {
                return Err(PrepError::Validation(format!(
                    "setup key '{}' is asked more than once",
                    key.as_str()
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The standard six-question script, greeting `user_name`
    pub fn for_user(user_name: &str) -> Self {
        let questions = vec![
            SetupQuestion::new(
                format!(
                    "Hello {}! Let's get you ready for your interview preparation. Are you ready to begin?",
                    user_name
                ),
                None,
            ),
            SetupQuestion::new(
                "What type of interview would you like to prepare for: technical, behavioural, or a mix of both?",
                Some(SetupKey::Type),
            ),
            SetupQuestion::new(
                "Which role or position are you applying for?",
                Some(SetupKey::Role),
            ),
            SetupQuestion::new(
                "What technologies or tech stack will you be working with in this role?",
                Some(SetupKey::Techstack),
            ),
            SetupQuestion::new(
                "What is the job experience level you are targeting: entry-level, mid-level, or senior?",
                Some(SetupKey::Level),
            ),
            SetupQuestion::new(
                "How many practice questions would you like me to prepare for you?",
                Some(SetupKey::Amount),
            ),
        ];
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SetupQuestion> {
        self.questions.get(index)
    }

    pub fn key_at(&self, index: usize) -> Option<SetupKey> {
        self.questions.get(index).and_then(|q| q.key)
    }

    /// The re-ask wording for the question at `index`
    pub fn reask_prompt(&self, index: usize) -> Option<String> {
        self.get(index)
            .map(|q| format!("{}{}", REASK_PREFIX, q.prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_script_layout() {
        let script = SetupScript::for_user("Ada");
        assert_eq!(script.len(), 6);
        assert!(script.get(0).unwrap().prompt.starts_with("Hello Ada!"));
        assert_eq!(script.key_at(0), None);
        assert_eq!(script.key_at(1), Some(SetupKey::Type));
        assert_eq!(script.key_at(3), Some(SetupKey::Techstack));
        assert_eq!(script.key_at(5), Some(SetupKey::Amount));
        assert_eq!(script.key_at(6), None);
    }

    #[test]
    fn test_reask_prompt_prefixes_question() {
        let script = SetupScript::for_user("Ada");
        let reask = script.reask_prompt(2).unwrap();
        assert_eq!(
            reask,
            "I didn't hear your response. Let me ask again: Which role or position are you applying for?"
        );
    }

    #[test]
    fn test_custom_script_validation() {
        assert!(SetupScript::new(vec![]).is_err());
        assert!(SetupScript::new(vec![SetupQuestion::new("Role?", Some(SetupKey::Role))]).is_err());
        assert!(SetupScript::new(vec![
            SetupQuestion::new("Ready?", None),
            SetupQuestion::new("Role?", Some(SetupKey::Role)),
            SetupQuestion::new("Role again?", Some(SetupKey::Role)),
        ])
        .is_err());

        let script = SetupScript::new(vec![
            SetupQuestion::new("Ready?", None),
            SetupQuestion::new("Role?", Some(SetupKey::Role)),
        ])
        .unwrap();
        assert_eq!(script.len(), 2);
    }
}
