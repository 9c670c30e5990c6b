//! JSON renderer for structured output

use super::OutputRenderer;
use crate::analysis::{classify, Verdict};
use crate::state::RequestState;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Machine readable view of a request state
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub state: &'a RequestState,
    /// Present only for `Succeeded`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    pub rendered_at: DateTime<Utc>,
}

impl<'a> Report<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self {
            state,
            verdict: state.result().map(|result| classify(Some(result))),
            rendered_at: Utc::now(),
        }
    }
}

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, state: &RequestState) -> String {
        let report = Report::new(state);
        if self.pretty {
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisResult;
    use serde_json::Value;

    #[test]
    fn test_json_renderer_succeeded() {
        let state = RequestState::Succeeded {
            result: AnalysisResult {
                is_fake_news: true,
                summary: Some("no outlet confirms this".to_string()),
                ..AnalysisResult::default()
            },
        };

        let output = JsonRenderer::compact().render(&state);
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["state"], "succeeded");
        assert_eq!(json["verdict"]["category"], "misinformation");
        assert_eq!(json["verdict"]["severity"], "warning");
        assert_eq!(json["verdict"]["summary"], "No outlet confirms this");
        assert_eq!(json["result"]["final_reasoning_summary"], "no outlet confirms this");
        assert!(json["rendered_at"].is_string());
    }

    #[test]
    fn test_json_renderer_failed() {
        let state = RequestState::Failed {
            message: "rate limited".to_string(),
        };

        let json: Value = serde_json::from_str(&JsonRenderer::new().render(&state)).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "rate limited");
        assert!(json.get("verdict").is_none());
    }
}
