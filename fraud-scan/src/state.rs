//! Lifecycle state of a single analysis request

use crate::types::AnalysisResult;
use serde::Serialize;

/// Exactly one of the legal request states.
///
/// Busy is `Pending`; a result and an error can never be present together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    /// No request made yet
    #[default]
    Idle,
    /// An outbound call is in flight. The last successful result is kept
    /// but not exposed; any previous error is dropped.
    Pending {
        #[serde(skip)]
        previous: Option<AnalysisResult>,
    },
    /// The service returned a verdict
    Succeeded { result: AnalysisResult },
    /// The call failed; `message` is ready for display
    Failed { message: String },
}

impl RequestState {
    /// Check if an outbound call is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }

    /// Check if the state is `Succeeded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Succeeded { .. } | RequestState::Failed { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short lowercase name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending { .. } => "pending",
            RequestState::Succeeded { .. } => "succeeded",
            RequestState::Failed { .. } => "failed",
        }
    }

    /// Move into `Pending`, carrying over the last successful result
    pub(crate) fn begin(&mut self) {
        let previous = match std::mem::take(self) {
            RequestState::Succeeded { result } => Some(result),
            RequestState::Pending { previous } => previous,
            RequestState::Idle | RequestState::Failed { .. } => None,
        };
        *self = RequestState::Pending { previous };
    }
}
