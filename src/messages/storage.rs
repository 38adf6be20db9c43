use super::types::{Speaker, TranscriptEntry};
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only record of the spoken exchanges of one call.
///
/// Clones share the same underlying log, so the UI can hold a read handle
/// while the dialogue controller appends.
#[derive(Debug, Clone)]
pub struct TranscriptLog {
    entries: Arc<RwLock<Vec<TranscriptEntry>>>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append an entry, keeping timestamps non-decreasing.
    pub fn append(&self, speaker: Speaker, text: impl Into<String>) -> TranscriptEntry {
        let mut entries = self.entries.write();
        let mut entry = TranscriptEntry::new(speaker, text);
        if let Some(last) = entries.last() {
            if entry.timestamp < last.timestamp {
                entry.timestamp = last.timestamp;
            }
        }
        entries.push(entry.clone());
        entry
    }

    pub fn get_all(&self) -> Vec<TranscriptEntry> {
        self.entries.read().clone()
    }

    /// The last `count` entries in chronological order
    pub fn recent(&self, count: usize) -> Vec<TranscriptEntry> {
        let entries = self.entries.read();
        let start = entries.len().saturating_sub(count);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for TranscriptLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let log = TranscriptLog::new();
        log.append(Speaker::Ai, "Are you ready?");
        log.append(Speaker::User, "yes");
        log.append(Speaker::Ai, "Which role?");

        let entries = log.get_all();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "Are you ready?");
        assert_eq!(entries[1].speaker, Speaker::User);
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_recent_returns_tail() {
        let log = TranscriptLog::new();
        for i in 0..6 {
            log.append(Speaker::User, format!("answer {}", i));
        }

        let recent = log.recent(4);
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].text, "answer 2");
        assert_eq!(recent[3].text, "answer 5");
        assert_eq!(log.recent(10).len(), 6);
    }

    #[test]
    fn test_clones_share_entries() {
        let log = TranscriptLog::new();
        let reader = log.clone();
        log.append(Speaker::Ai, "Hello");
        assert_eq!(reader.len(), 1);
        assert!(!reader.is_empty());
    }
}
