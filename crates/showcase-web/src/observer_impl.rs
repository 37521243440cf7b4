use crate::model::{DiagnosticEntry, DiagnosticLog, GenerationStatus};
use chrono::Utc;
use showcase_core::WorkflowObserver;

impl WorkflowObserver for DiagnosticLog {
    fn on_start(&self, id: &str, topic: &str, _prompt: &str) {
        self.record(DiagnosticEntry {
            id: id.to_string(),
            timestamp: Utc::now(),
            topic: topic.to_string(),
            status: GenerationStatus::Pending,
            error: None,
            tokens_used: None,
        });
    }

    fn on_success(&self, id: &str, _text: &str, tokens_used: Option<u32>) {
        if let Some(mut entry) = self.entries.get_mut(id) {
            entry.status = GenerationStatus::Succeeded;
            entry.tokens_used = tokens_used;
        }
    }

    fn on_failure(&self, id: &str, topic: &str, error: &str) {
        match self.entries.get_mut(id) {
            Some(mut entry) => {
                entry.status = GenerationStatus::Failed;
                entry.error = Some(error.to_string());
            }
            None => self.record(DiagnosticEntry {
                id: id.to_string(),
                timestamp: Utc::now(),
                topic: topic.to_string(),
                status: GenerationStatus::Failed,
                error: Some(error.to_string()),
                tokens_used: None,
            }),
        }
    }
}
