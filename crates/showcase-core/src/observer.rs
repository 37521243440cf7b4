use std::sync::Arc;

/// Trait for observing workflow events (diagnostics, dashboards).
///
/// Failure callbacks are the operator-facing half of the error boundary: the
/// caller only ever gets the fixed fallback string, the observer gets the cause.
pub trait WorkflowObserver: Send + Sync {
    /// Called when a generation starts.
    fn on_start(&self, id: &str, topic: &str, prompt: &str);

    /// Called when the service answered. `text` is what the caller receives.
    fn on_success(&self, id: &str, text: &str, tokens_used: Option<u32>);

    /// Called when the service call failed.
    fn on_failure(&self, id: &str, topic: &str, error: &str);
}

pub type ObserverPtr = Arc<dyn WorkflowObserver>;
