use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Entries kept before the oldest is dropped.
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Pending,
    Succeeded,
    Failed,
}

/// One generation as seen by the operator. Response text is not kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub topic: String,
    pub status: GenerationStatus,
    pub error: Option<String>,
    pub tokens_used: Option<u32>,
}

/// Operator-facing log of recent generations.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    pub entries: Arc<DashMap<String, DiagnosticEntry>>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, entry: DiagnosticEntry) {
        self.entries.insert(entry.id.clone(), entry);
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|e| e.timestamp)
                .map(|e| e.key().clone());
            match oldest {
                Some(id) => {
                    self.entries.remove(&id);
                }
                None => break,
            }
        }
    }

    /// All entries, newest first.
    pub fn recent(&self) -> Vec<DiagnosticEntry> {
        let mut entries: Vec<_> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Failed entries only, newest first.
    pub fn failures(&self) -> Vec<DiagnosticEntry> {
        self.recent()
            .into_iter()
            .filter(|e| e.status == GenerationStatus::Failed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(id: &str, age_secs: i64, status: GenerationStatus) -> DiagnosticEntry {
        DiagnosticEntry {
            id: id.to_string(),
            timestamp: Utc::now() - Duration::seconds(age_secs),
            topic: "t".to_string(),
            status,
            error: None,
            tokens_used: None,
        }
    }

    #[test]
    fn test_recent_is_newest_first() {
        let log = DiagnosticLog::new();
        log.record(entry("old", 30, GenerationStatus::Succeeded));
        log.record(entry("new", 1, GenerationStatus::Failed));

        let ids: Vec<_> = log.recent().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["new", "old"]);
        assert_eq!(log.failures().len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let log = DiagnosticLog::with_capacity(2);
        log.record(entry("a", 30, GenerationStatus::Succeeded));
        log.record(entry("b", 20, GenerationStatus::Succeeded));
        log.record(entry("c", 10, GenerationStatus::Succeeded));

        assert_eq!(log.entries.len(), 2);
        assert!(!log.entries.contains_key("a"));
    }
}
