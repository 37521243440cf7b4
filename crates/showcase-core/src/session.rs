//! UI state around the idea workflow.
//!
//! Mirrors the widget: a topic field, a response area and a loading flag.
//! Submissions are unguarded unless the in-flight guard is enabled, so two
//! overlapping calls may race for the response field and the last one to
//! settle wins.

use crate::workflow::IdeaWorkflow;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Snapshot of the widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Current topic text.
    pub topic: String,

    /// Last settled response. Empty means nothing has been shown yet.
    pub response: String,

    /// True while a submission is pending.
    pub loading: bool,
}

/// Coarse phase derived from [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Settled,
}

impl UiState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.response.is_empty() {
            Phase::Idle
        } else {
            Phase::Settled
        }
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Topic was empty or whitespace; nothing happened.
    Ignored,
    /// Another submission is pending and the in-flight guard is on.
    Busy,
    /// The workflow settled with this text.
    Settled(String),
}

#[derive(Debug, Default)]
struct SessionState {
    ui: UiState,
    in_flight: usize,
}

/// Holder of the widget state.
///
/// State is process-wide: every caller sharing one session (for example all
/// clients of the web shell) sees and overwrites the same topic and response.
#[derive(Debug)]
pub struct IdeaSession {
    workflow: IdeaWorkflow,
    state: Mutex<SessionState>,
    in_flight_guard: bool,
}

impl IdeaSession {
    /// Create a session in the idle state.
    pub fn new(workflow: IdeaWorkflow) -> Self {
        Self {
            workflow,
            state: Mutex::new(SessionState::default()),
            in_flight_guard: false,
        }
    }

    /// Reject submissions while another one is pending.
    pub fn with_in_flight_guard(mut self, enabled: bool) -> Self {
        self.in_flight_guard = enabled;
        self
    }

    pub fn workflow(&self) -> &IdeaWorkflow {
        &self.workflow
    }

    /// Mirror the text field.
    pub fn set_topic(&self, topic: impl Into<String>) {
        self.lock().ui.topic = topic.into();
    }

    /// Current state.
    pub fn snapshot(&self) -> UiState {
        self.lock().ui.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().ui.phase()
    }

    /// Submit a topic.
    ///
    /// The lock is released before the workflow runs, so other submissions and
    /// snapshots proceed while this one waits on the network.
    #[instrument(skip(self, topic))]
    pub async fn submit(&self, topic: &str) -> SubmitOutcome {
        if topic.trim().is_empty() {
            debug!("Ignoring empty topic");
            return SubmitOutcome::Ignored;
        }

        {
            let mut state = self.lock();
            if self.in_flight_guard && state.in_flight > 0 {
                info!("Submission rejected, {} already in flight", state.in_flight);
                return SubmitOutcome::Busy;
            }
            state.ui.topic = topic.to_string();
            state.in_flight += 1;
            state.ui.loading = true;
        }
        // Released on settle and on cancellation alike.
        let pending = InFlight { session: self };

        let text = self.workflow.generate(topic).await;

        self.lock().ui.response = text.clone();
        drop(pending);

        SubmitOutcome::Settled(text)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // State is plain data; a panic elsewhere cannot leave it half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// One pending submission. Dropping it clears the loading flag once no other
/// submission is pending, even if the submitting future was cancelled.
struct InFlight<'a> {
    session: &'a IdeaSession,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        state.ui.loading = state.in_flight > 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;
    use crate::workflow::FAILURE_MESSAGE;
    use std::sync::Arc;
    use std::time::Duration;

    fn session_with(provider: Arc<MockProvider>) -> IdeaSession {
        IdeaSession::new(IdeaWorkflow::from_shared(provider, "gemini-3-flash-preview"))
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let session = session_with(Arc::new(MockProvider::new()));
        assert_eq!(session.snapshot(), UiState::default());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_empty_topic_never_calls_provider() {
        let provider = Arc::new(MockProvider::new().always("should not appear"));
        let session = session_with(provider.clone());

        assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(session.submit("   \t\n").await, SubmitOutcome::Ignored);

        assert_eq!(provider.call_count(), 0);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_submit_settles_with_text() {
        let provider = Arc::new(MockProvider::new().with_response("Music Education", "AppName: TuneUp — ..."));
        let session = session_with(provider);

        let outcome = session.submit("Music Education").await;

        assert_eq!(outcome, SubmitOutcome::Settled("AppName: TuneUp — ...".to_string()));
        let state = session.snapshot();
        assert_eq!(state.topic, "Music Education");
        assert_eq!(state.response, "AppName: TuneUp — ...");
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Settled);
    }

    #[tokio::test]
    async fn test_failure_settles_with_fallback() {
        let session = session_with(Arc::new(MockProvider::new().failing("network unreachable")));

        let outcome = session.submit("Gardening").await;

        assert_eq!(outcome, SubmitOutcome::Settled(FAILURE_MESSAGE.to_string()));
        assert_eq!(session.snapshot().response, FAILURE_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_only_while_pending() {
        let provider = Arc::new(
            MockProvider::new()
                .always("idea")
                .with_delay("Slow", Duration::from_millis(500)),
        );
        let session = Arc::new(session_with(provider));

        let pending = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("Slow Food").await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        let mid = session.snapshot();
        assert!(mid.loading);
        assert_eq!(mid.response, "");
        assert_eq!(mid.phase(), Phase::Loading);

        pending.await.unwrap();
        let done = session.snapshot();
        assert!(!done.loading);
        assert_eq!(done.response, "idea");
    }

    #[tokio::test(start_paused = true)]
    async fn test_previous_response_kept_until_next_settles() {
        let provider = Arc::new(
            MockProvider::new()
                .with_response("First", "first idea")
                .with_response("Second", "second idea")
                .with_delay("Second", Duration::from_millis(200)),
        );
        let session = Arc::new(session_with(provider));

        session.submit("First").await;

        let pending = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("Second").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(session.snapshot().response, "first idea");
        assert!(session.snapshot().loading);

        pending.await.unwrap();
        assert_eq!(session.snapshot().response, "second idea");
    }

    #[tokio::test]
    async fn test_overlapping_submissions_do_not_crash() {
        let provider = Arc::new(
            MockProvider::new()
                .with_response("Alpha", "alpha idea")
                .with_response("Beta", "beta idea")
                .with_delay("Alpha", Duration::from_millis(20))
                .with_delay("Beta", Duration::from_millis(20)),
        );
        let session = Arc::new(session_with(provider.clone()));

        let (a, b) = tokio::join!(session.submit("Alpha"), session.submit("Beta"));

        assert_eq!(a, SubmitOutcome::Settled("alpha idea".to_string()));
        assert_eq!(b, SubmitOutcome::Settled("beta idea".to_string()));
        assert_eq!(provider.call_count(), 2);

        // Either one may win the race for the response field.
        let state = session.snapshot();
        assert!(state.response == "alpha idea" || state.response == "beta idea");
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_stays_true_until_last_overlap_settles() {
        let provider = Arc::new(
            MockProvider::new()
                .always("done")
                .with_delay("Quick", Duration::from_millis(50))
                .with_delay("Lengthy", Duration::from_millis(500)),
        );
        let session = Arc::new(session_with(provider));

        let slow = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("Lengthy").await })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        session.submit("Quick").await;

        let state = session.snapshot();
        assert_eq!(state.response, "done");
        assert!(state.loading);

        slow.await.unwrap();
        assert!(!session.snapshot().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_guard_rejects_second_submission() {
        let provider = Arc::new(
            MockProvider::new()
                .always("guarded")
                .with_delay("One", Duration::from_millis(100)),
        );
        let session = Arc::new(session_with(provider.clone()).with_in_flight_guard(true));

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("One").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(session.submit("Two").await, SubmitOutcome::Busy);
        assert_eq!(first.await.unwrap(), SubmitOutcome::Settled("guarded".to_string()));
        assert_eq!(provider.call_count(), 1);

        // Guard lifts once settled.
        assert_eq!(
            session.submit("Three").await,
            SubmitOutcome::Settled("guarded".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_releases_loading() {
        let provider = Arc::new(
            MockProvider::new()
                .always("recovered")
                .with_delay("Slow", Duration::from_millis(500)),
        );
        let session = Arc::new(session_with(provider.clone()).with_in_flight_guard(true));

        let task = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("Slow").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(session.snapshot().loading);

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        let state = session.snapshot();
        assert!(!state.loading);
        assert_eq!(state.response, "");
        assert_eq!(state.phase(), Phase::Idle);

        assert_eq!(
            session.submit("Next").await,
            SubmitOutcome::Settled("recovered".to_string())
        );
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_set_topic() {
        let session = session_with(Arc::new(MockProvider::new()));
        session.set_topic("draft");
        assert_eq!(session.snapshot().topic, "draft");
        assert_eq!(session.phase(), Phase::Idle);
    }
}
