//! Wire types shared by the gateway client and the generation endpoint

use crate::dialogue::SetupAnswers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub level: String,
    /// Comma-separated technologies
    #[serde(default)]
    pub techstack: String,
    #[serde(rename = "type", default)]
    pub interview_type: String,
    /// Number of questions to generate
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub userid: String,
}

impl GenerationRequest {
    pub fn new(answers: &SetupAnswers, user_id: &str) -> Self {
        Self {
            role: answers.role.clone(),
            level: answers.level.clone(),
            techstack: answers.techstack.clone(),
            interview_type: answers.interview_type.clone(),
            amount: answers.amount.clone(),
            userid: user_id.to_string(),
        }
    }

    /// Names of the fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("type", &self.interview_type),
            ("role", &self.role),
            ("level", &self.level),
            ("techstack", &self.techstack),
            ("amount", &self.amount),
            ("userid", &self.userid),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
    }

    /// Technologies as a list of trimmed, non-empty identifiers
    pub fn techstack_list(&self) -> Vec<String> {
        self.techstack
            .split(',')
            .map(|tech| tech.trim())
            .filter(|tech| !tech.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Reply from `POST /api/chat`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn succeeded(interview_id: impl Into<String>, questions_count: usize) -> Self {
        Self {
            success: true,
            interview_id: Some(interview_id.into()),
            questions_count: Some(questions_count),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            interview_id: None,
            questions_count: None,
            error: Some(error.into()),
        }
    }
}

/// Result of one generation request, as seen by the dialogue
pub type GenerationOutcome = crate::Result<GenerationResponse>;

/// Persisted interview document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: String,
    pub techstack: Vec<String>,
    pub questions: Vec<String>,
    pub user_id: String,
    pub finalized: bool,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
}

impl InterviewRecord {
    pub fn new(request: &GenerationRequest, questions: Vec<String>, cover_image: String) -> Self {
        Self {
            role: request.role.clone(),
            interview_type: request.interview_type.clone(),
            level: request.level.clone(),
            techstack: request.techstack_list(),
            questions,
            user_id: request.userid.clone(),
            finalized: true,
            cover_image,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::SetupKey;

    fn request() -> GenerationRequest {
        let mut answers = SetupAnswers::new();
        answers.record(SetupKey::Type, "technical").unwrap();
        answers.record(SetupKey::Role, "backend engineer").unwrap();
        answers.record(SetupKey::Techstack, "Go, Postgres").unwrap();
        answers.record(SetupKey::Level, "senior").unwrap();
        answers.record(SetupKey::Amount, "5").unwrap();
        GenerationRequest::new(&answers, "u1")
    }

    #[test]
    fn test_request_wire_format() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["type"], "technical");
        assert_eq!(json["userid"], "u1");
        assert_eq!(json["techstack"], "Go, Postgres");
        assert_eq!(json["amount"], "5");
    }

    #[test]
    fn test_missing_fields() {
        assert!(request().missing_fields().is_empty());

        let partial: GenerationRequest =
            serde_json::from_str(r#"{"role": "dev", "type": "technical"}"#).unwrap();
        assert_eq!(
            partial.missing_fields(),
            vec!["level", "techstack", "amount", "userid"]
        );
    }

    #[test]
    fn test_techstack_split() {
        let mut req = request();
        assert_eq!(req.techstack_list(), vec!["Go", "Postgres"]);
        req.techstack = " React ,, TypeScript ".into();
        assert_eq!(req.techstack_list(), vec!["React", "TypeScript"]);
    }

    #[test]
    fn test_response_parsing() {
        let ok: GenerationResponse = serde_json::from_str(
            r#"{"success": true, "interviewId": "abc", "questionsCount": 5}"#,
        )
        .unwrap();
        assert_eq!(ok, GenerationResponse::succeeded("abc", 5));

        let failed: GenerationResponse =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_record_from_request() {
        let record = InterviewRecord::new(&request(), vec!["Q1".into()], "/covers/x.png".into());
        assert_eq!(record.techstack, vec!["Go", "Postgres"]);
        assert!(record.finalized);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["coverImage"], "/covers/x.png");
        assert!(json["createdAt"].is_string());
    }
}
