//! Lifecycle of one outstanding analysis request
//!
//! The controller owns the input text and the [`RequestState`]. `analyze()`
//! is the only operation that changes the state; readers get snapshots or a
//! watch receiver and can never write.

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::http::HttpAnalysisService;
use crate::state::RequestState;
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, AnalysisResult};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Shown when a failure carries no server message
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Something went wrong while analyzing your text. Please try again.";

/// Why an `analyze()` call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Text was empty or whitespace only
    EmptyInput,
    /// Another call from this controller is still in flight
    AlreadyPending,
}

/// What a single `analyze()` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    Skipped(SkipReason),
    Succeeded,
    Failed,
}

/// Mediates request/response cycles against an [`AnalysisService`]
pub struct RequestController<S> {
    service: S,
    text: String,
    state: watch::Sender<RequestState>,
    fallback_message: String,
}

/// Fails a `Pending` state left behind when `analyze()` is dropped mid-flight
struct PendingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    fallback_message: &'a str,
    armed: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a watch::Sender<RequestState>, fallback_message: &'a str) -> Self {
        Self {
            state,
            fallback_message,
            armed: true,
        }
    }

    /// Publish the terminal state and disarm
    fn complete(mut self, terminal: RequestState) {
        self.armed = false;
        self.state.send_replace(terminal);
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("analysis dropped before completion");
        let message = self.fallback_message.to_string();
        self.state.send_if_modified(|state| {
            if !state.is_pending() {
                return false;
            }
            *state = RequestState::Failed { message };
            true
        });
    }
}

impl RequestController<HttpAnalysisService> {
    /// Controller talking to the configured HTTP endpoint
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let service = HttpAnalysisService::new(config)?;
        Ok(Self::new(service).with_fallback_message(config.fallback_message()))
    }
}

impl<S: AnalysisService> RequestController<S> {
    /// Create an idle controller with empty text
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            service,
            text: String::new(),
            state,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Override the message used when a failure carries no server message
    #[must_use]
    pub fn with_fallback_message<M: Into<String>>(mut self, message: M) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Replace the stored input text
    pub fn set_text<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Last result, only while `Succeeded`
    pub fn result(&self) -> Option<AnalysisResult> {
        self.state.borrow().result().cloned()
    }

    /// Last error message, only while `Failed`
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_string)
    }

    /// Read-only receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Run one analysis of the current text.
    ///
    /// No-op when the trimmed text is empty or a call is already in flight.
    /// Otherwise moves to `Pending`, makes exactly one outbound call, and
    /// ends in `Succeeded` or `Failed`. Service failures never escape; they
    /// become the `Failed` message. Dropping the future while the call is in
    /// flight leaves the controller `Failed` with the fallback message.
    pub async fn analyze(&self) -> AnalyzeOutcome {
        if self.is_busy() {
            debug!("analyze skipped: request already in flight");
            return AnalyzeOutcome::Skipped(SkipReason::AlreadyPending);
        }

        let Some(request) = AnalysisRequest::from_input(&self.text) else {
            debug!("analyze skipped: empty input");
            return AnalyzeOutcome::Skipped(SkipReason::EmptyInput);
        };

        // Check and enter Pending in one update so concurrent callers cannot both win
        let entered = self.state.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            state.begin();
            true
        });
        if !entered {
            debug!("analyze skipped: request already in flight");
            return AnalyzeOutcome::Skipped(SkipReason::AlreadyPending);
        }
        let guard = PendingGuard::new(&self.state, &self.fallback_message);
        debug!(chars = request.text.chars().count(), "analysis pending");

        match self.service.analyze(&request).await {
            Ok(result) => {
                debug!(
                    fraud = result.has_fraud(),
                    fake_news = result.is_fake_news,
                    irrelevant = result.is_irrelevant_input,
                    "analysis succeeded"
                );
                guard.complete(RequestState::Succeeded { result });
                AnalyzeOutcome::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.fallback_message.clone());
                guard.complete(RequestState::Failed { message });
                AnalyzeOutcome::Failed
            }
        }
    }
}
