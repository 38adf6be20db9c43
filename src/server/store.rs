//! Interview persistence

use crate::gateway::InterviewRecord;
use crate::{PrepError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// A persisted interview together with its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredInterview {
    pub id: String,
    #[serde(flatten)]
    pub record: InterviewRecord,
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Persist `record` and return its new id
    async fn insert(&self, record: InterviewRecord) -> Result<String>;

    async fn get(&self, id: &str) -> Result<Option<StoredInterview>>;

    /// All interviews created by `user_id`, newest first
    async fn by_user(&self, user_id: &str) -> Result<Vec<StoredInterview>>;

    /// Finalized interviews of users other than `exclude_user`, newest first
    async fn latest(&self, exclude_user: &str, limit: usize) -> Result<Vec<StoredInterview>>;
}

fn newest_first(interviews: &mut [StoredInterview]) {
    interviews.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
}

fn select_by_user(all: Vec<StoredInterview>, user_id: &str) -> Vec<StoredInterview> {
    let mut found: Vec<_> = all
        .into_iter()
        .filter(|i| i.record.user_id == user_id)
        .collect();
    newest_first(&mut found);
    found
}

fn select_latest(all: Vec<StoredInterview>, exclude_user: &str, limit: usize) -> Vec<StoredInterview> {
    let mut found: Vec<_> = all
        .into_iter()
        .filter(|i| i.record.finalized && i.record.user_id != exclude_user)
        .collect();
    newest_first(&mut found);
    found.truncate(limit);
    found
}

/// Store kept in process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    interviews: Arc<RwLock<Vec<StoredInterview>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.interviews.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.interviews.read().is_empty()
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn insert(&self, record: InterviewRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.interviews.write().push(StoredInterview {
            id: id.clone(),
            record,
        });
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredInterview>> {
        Ok(self.interviews.read().iter().find(|i| i.id == id).cloned())
    }

    async fn by_user(&self, user_id: &str) -> Result<Vec<StoredInterview>> {
        let all = self.interviews.read().clone();
        Ok(select_by_user(all, user_id))
    }

    async fn latest(&self, exclude_user: &str, limit: usize) -> Result<Vec<StoredInterview>> {
        let all = self.interviews.read().clone();
        Ok(select_latest(all, exclude_user, limit))
    }
}

/// Store writing one `<id>.json` document per interview into a directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open `dir`, creating it if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| PrepError::Storage(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        // Ids are uuids; anything else cannot name a stored document
        Uuid::parse_str(id)
            .ok()
            .map(|uuid| self.dir.join(format!("{}.json", uuid)))
    }

    async fn load_all(&self) -> Result<Vec<StoredInterview>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| PrepError::Storage(e.to_string()))?;
        let mut interviews = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PrepError::Storage(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let bytes = tokio::fs::read(&path).await?;
            match serde_json::from_slice::<StoredInterview>(&bytes) {
                Ok(interview) => interviews.push(interview),
                Err(e) => warn!("Skipping unreadable interview {}: {}", path.display(), e),
            }
        }
        Ok(interviews)
    }
}

#[async_trait]
impl InterviewStore for JsonFileStore {
    async fn insert(&self, record: InterviewRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let path = self
            .path_for(&id)
            .ok_or_else(|| PrepError::Storage("invalid interview id".into()))?;
        let stored = StoredInterview {
            id: id.clone(),
            record,
        };
        let bytes = serde_json::to_vec_pretty(&stored)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| PrepError::Storage(format!("{}: {}", path.display(), e)))?;
        debug!("Saved interview {} to {}", id, path.display());
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredInterview>> {
        let Some(path) = self.path_for(id) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PrepError::Storage(format!("{}: {}", path.display(), e))),
        }
    }

    async fn by_user(&self, user_id: &str) -> Result<Vec<StoredInterview>> {
        Ok(select_by_user(self.load_all().await?, user_id))
    }

    async fn latest(&self, exclude_user: &str, limit: usize) -> Result<Vec<StoredInterview>> {
        Ok(select_latest(self.load_all().await?, exclude_user, limit))
    }
}
