use crate::error::{AnalysisError, Result};
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, AnalysisResult};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Clone)]
enum MockOutcome {
    Verdict(AnalysisResult),
    ServiceError { status: u16, message: Option<String> },
    TransportError(String),
}

/// Mock analysis service for testing
#[derive(Clone)]
pub struct MockAnalysisService {
    outcome: MockOutcome,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl MockAnalysisService {
    /// Service that answers every call with `result`
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            outcome: MockOutcome::Verdict(result),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Service that rejects every call with a non-success status
    pub fn with_service_error(mut self, status: u16, message: Option<&str>) -> Self {
        self.outcome = MockOutcome::ServiceError {
            status,
            message: message.map(str::to_string),
        };
        self
    }

    /// Service that fails before any response arrives
    pub fn with_transport_error(mut self, message: &str) -> Self {
        self.outcome = MockOutcome::TransportError(message.to_string());
        self
    }

    /// Hold every call until `gate` is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn record(&self, request: &AnalysisRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new(AnalysisResult::default())
    }
}

impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.record(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            MockOutcome::Verdict(result) => Ok(result.clone()),
            MockOutcome::ServiceError { status, message } => {
                Err(AnalysisError::service(*status, message.clone()))
            }
            MockOutcome::TransportError(message) => Err(AnalysisError::general(message)),
        }
    }
}

/// Build a result with the named flags set.
///
/// Accepts the wire names `is_fraud_url`, `is_fraud_email`, `is_fraud_sms`,
/// `is_fake_news` and `is_irrelevant_input`; anything else is ignored.
pub fn result_with(flags: &[&str]) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    for flag in flags {
        match *flag {
            "is_fraud_url" => result.is_fraud_url = true,
            "is_fraud_email" => result.is_fraud_email = true,
            "is_fraud_sms" => result.is_fraud_sms = true,
            "is_fake_news" => result.is_fake_news = true,
            "is_irrelevant_input" => result.is_irrelevant_input = true,
            _ => {}
        }
    }
    result
}
