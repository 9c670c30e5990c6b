use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fraud-scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for configuration loading and the outbound analysis call
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Analysis service returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Service { status: u16, message: Option<String> },

    #[error("Malformed response from analysis service: {message}")]
    MalformedResponse { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl AnalysisError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new service error from a non-success status
    pub fn service(status: u16, message: Option<String>) -> Self {
        Self::Service { status, message }
    }

    /// Create a new malformed response error
    pub fn malformed_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Message supplied by the server in the failure body, if any.
    ///
    /// Only `Service` errors can carry one; transport and parse failures
    /// never do.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = AnalysisError::service(429, Some("rate limited".to_string()));
        assert_eq!(err.to_string(), "Analysis service returned status 429: rate limited");
        assert_eq!(err.server_message(), Some("rate limited"));

        let err = AnalysisError::service(500, None);
        assert_eq!(err.to_string(), "Analysis service returned status 500");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_non_service_errors_have_no_server_message() {
        assert!(AnalysisError::general("boom").server_message().is_none());
        assert!(AnalysisError::malformed_response("eof").server_message().is_none());
        assert!(AnalysisError::invalid_config("x")
            .to_string()
            .contains("Invalid configuration"));
    }
}
