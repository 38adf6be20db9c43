//! Interview generation: validate, prompt, parse, persist

use crate::gateway::{GenerationRequest, InterviewRecord};
use crate::llm::{extract_questions, interview_prompt, QuestionGenerator};
use crate::server::store::InterviewStore;
use crate::{PrepError, Result};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, info};

/// Cover images assigned to new interviews
pub const INTERVIEW_COVERS: &[&str] = &[
    "/covers/adobe.png",
    "/covers/amazon.png",
    "/covers/facebook.png",
    "/covers/hostinger.png",
    "/covers/pinterest.png",
    "/covers/quora.png",
    "/covers/reddit.png",
    "/covers/skype.png",
    "/covers/spotify.png",
    "/covers/telegram.png",
    "/covers/tiktok.png",
    "/covers/yahoo.png",
];

pub fn random_cover() -> String {
    INTERVIEW_COVERS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("/covers/adobe.png")
        .to_string()
}

/// A generated and stored interview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterview {
    pub interview_id: String,
    pub questions_count: usize,
}

#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn QuestionGenerator>,
    store: Arc<dyn InterviewStore>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn QuestionGenerator>, store: Arc<dyn InterviewStore>) -> Self {
        Self { generator, store }
    }

    pub fn store(&self) -> &Arc<dyn InterviewStore> {
        &self.store
    }

    /// Generate questions for `request` and persist the interview.
    ///
    /// Missing fields are a `Validation` error; an unusable model reply is
    /// `MalformedResponse`.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedInterview> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(PrepError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        info!(
            "Generating interview questions: type={}, role={}, level={}, amount={}, user={}",
            request.interview_type, request.role, request.level, request.amount, request.userid
        );
        let prompt = interview_prompt(request);
        let reply = self.generator.generate(&prompt).await?;
        let questions = extract_questions(&reply)?;
        debug!("Parsed {} questions", questions.len());

        let questions_count = questions.len();
        let record = InterviewRecord::new(request, questions, random_cover());
        let interview_id = self.store.insert(record).await?;
        info!("Interview saved successfully with id {}", interview_id);

        Ok(GeneratedInterview {
            interview_id,
            questions_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::store::MemoryStore;
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl QuestionGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            role: "backend engineer".into(),
            level: "senior".into(),
            techstack: "Go, Postgres".into(),
            interview_type: "technical".into(),
            amount: "2".into(),
            userid: "u1".into(),
        }
    }

    #[tokio::test]
    async fn test_generate_persists_interview() {
        let store = Arc::new(MemoryStore::new());
        let service = GenerationService::new(
            Arc::new(FixedGenerator("Sure!\n[\"Q1\", \"Q2\"]\nGood luck")),
            store.clone(),
        );

        let generated = service.generate(&request()).await.unwrap();
        assert_eq!(generated.questions_count, 2);

        let stored = store.get(&generated.interview_id).await.unwrap().unwrap();
        assert_eq!(stored.record.techstack, vec!["Go", "Postgres"]);
        assert_eq!(stored.record.questions, vec!["Q1", "Q2"]);
        assert!(stored.record.finalized);
        assert!(INTERVIEW_COVERS.contains(&stored.record.cover_image.as_str()));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_before_generation() {
        let store = Arc::new(MemoryStore::new());
        let service = GenerationService::new(Arc::new(FixedGenerator("[\"Q1\"]")), store.clone());
        let mut req = request();
        req.role.clear();

        let err = service.generate(&req).await.unwrap_err();
        assert!(matches!(err, PrepError::Validation(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_reply_not_persisted() {
        let store = Arc::new(MemoryStore::new());
        let service =
            GenerationService::new(Arc::new(FixedGenerator("no questions today")), store.clone());

        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, PrepError::MalformedResponse(_)));
        assert!(store.is_empty());
    }
}
