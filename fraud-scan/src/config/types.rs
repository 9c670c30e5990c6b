use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fscan.toml";

/// Default analysis endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Client configuration for the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Absolute URL the text is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Transport timeout in seconds; expiry surfaces as a failed request
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Message shown when a failure carries no server message
    pub fallback_message: Option<String>,
    /// Extra headers sent with every request
    pub headers: Option<HashMap<String, String>>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            fallback_message: None,
            headers: None,
        }
    }
}
