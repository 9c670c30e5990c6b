use crate::error::{AnalysisError, Result};
use crate::types::AnalysisResult;
use reqwest::Response;
use serde_json::Value;

/// Converts a reqwest response into a verdict or a typed failure
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    pub async fn convert_response(&self, response: Response) -> Result<AnalysisResult> {
        let status = response.status();
        let body = response.text().await?;
        self.convert_body(status.as_u16(), &body)
    }

    /// Status and body to result; split out so it can be tested without a server
    pub fn convert_body(&self, status: u16, body: &str) -> Result<AnalysisResult> {
        if !(200..300).contains(&status) {
            return Err(AnalysisError::service(status, extract_error_message(body)));
        }

        serde_json::from_str(body).map_err(|e| AnalysisError::malformed_response(e.to_string()))
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull a human readable message out of an error body.
///
/// Looks at `message`, then `detail` as a string, then the first `msg` of a
/// `detail` list, then `error`. Blank values count as absent.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let non_blank = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_blank(value.get("message"))
        .or_else(|| non_blank(value.get("detail")))
        .or_else(|| {
            value
                .get("detail")
                .and_then(Value::as_array)
                .and_then(|items| items.iter().find_map(|item| non_blank(item.get("msg"))))
        })
        .or_else(|| non_blank(value.get("error")))
}
