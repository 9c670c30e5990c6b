//! fraud-scan - request lifecycle and verdict classification for a remote
//! fraud and misinformation analysis service
//!
//! A [`RequestController`] owns the input text and the state of one
//! outstanding request; [`classify`] maps the stored result to a single
//! display category.

// Core modules
pub mod config;
pub mod error;
pub mod state;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod controller;
pub mod http;
pub mod renderers;
pub mod testing;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{classify, Category, Severity, Verdict};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, DefaultConfigLoader};
pub use controller::{AnalyzeOutcome, RequestController, SkipReason, DEFAULT_FALLBACK_MESSAGE};
pub use error::{AnalysisError, Result};
pub use http::HttpAnalysisService;
pub use renderers::{CliRenderer, JsonRenderer, OutputRenderer};
pub use state::RequestState;
pub use traits::AnalysisService;
pub use types::{AnalysisRequest, AnalysisResult, FraudKind};

/// Analyze `text` once against the configured endpoint and return the final state
pub async fn analyze_text(config: &AnalyzerConfig, text: &str) -> Result<RequestState> {
    let mut controller = RequestController::from_config(config)?;
    controller.set_text(text);
    controller.analyze().await;
    Ok(controller.state())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_imports() {
        let config = AnalyzerConfig::default();
        assert!(config.endpoint.starts_with("http://"));

        let verdict = classify(None);
        assert_eq!(verdict.category, Category::NoResult);
    }

    #[test]
    fn test_analyze_text_skips_blank_input() {
        let state = tokio_test::block_on(analyze_text(&AnalyzerConfig::default(), "   ")).unwrap();
        assert_eq!(state, RequestState::Idle);
    }
}
