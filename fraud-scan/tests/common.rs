//! Shared helpers for fraud-scan integration tests

#![allow(dead_code)]

use fraud_scan::{AnalyzerConfig, HttpAnalysisService, RequestController};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const ANALYZE_PATH: &str = "/analyze";

/// Configuration pointing at the mock server
pub fn config_for(server: &MockServer) -> AnalyzerConfig {
    AnalyzerConfig::builder()
        .endpoint(format!("{}{}", server.uri(), ANALYZE_PATH))
        .timeout(5)
        .build()
        .expect("mock server config should be valid")
}

/// Controller with `text` already set
pub fn controller_for(server: &MockServer, text: &str) -> RequestController<HttpAnalysisService> {
    let mut controller =
        RequestController::from_config(&config_for(server)).expect("controller should build");
    controller.set_text(text);
    controller
}

/// A full success body in the shape the service returns
pub fn verdict_body(flags: &[&str], summary: &str, actions: &[&str]) -> Value {
    let flag = |name: &str| flags.contains(&name);
    json!({
        "final_reasoning_summary": summary,
        "is_fraud_email": flag("is_fraud_email"),
        "is_fraud_sms": flag("is_fraud_sms"),
        "is_fraud_url": flag("is_fraud_url"),
        "is_fake_news": flag("is_fake_news"),
        "is_irrelevant_input": flag("is_irrelevant_input"),
        "actions_taken": actions,
    })
}
