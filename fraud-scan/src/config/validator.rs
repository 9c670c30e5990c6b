use crate::config::types::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::traits::ConfigValidator;
use reqwest::header::{HeaderName, HeaderValue};
use std::path::Path;
use url::Url;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = AnalyzerConfig;

    /// Validate configuration (uses enhanced validation with default context)
    fn validate(&self, config: &AnalyzerConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &AnalyzerConfig,
        config_path: P,
    ) -> Result<()> {
        let source = config_path.as_ref().to_string_lossy();

        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            AnalysisError::invalid_config(format!(
                "Invalid endpoint '{}' in {}: {}",
                config.endpoint, source, e
            ))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AnalysisError::invalid_config(format!(
                "Endpoint '{}' in {} must use http or https",
                config.endpoint, source
            )));
        }

        if config.timeout_seconds == 0 {
            return Err(AnalysisError::invalid_config(format!(
                "timeout_seconds in {} must be greater than zero",
                source
            )));
        }

        for (name, value) in config.headers.iter().flatten() {
            if name.trim().is_empty() {
                return Err(AnalysisError::invalid_config(format!(
                    "Empty header name in [headers] of {}",
                    source
                )));
            }
            if HeaderName::from_bytes(name.trim().as_bytes()).is_err() {
                return Err(AnalysisError::invalid_config(format!(
                    "Invalid header name '{}' in [headers] of {}",
                    name, source
                )));
            }
            if HeaderValue::from_str(value).is_err() {
                return Err(AnalysisError::invalid_config(format!(
                    "Invalid value for header '{}' in [headers] of {}",
                    name, source
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidatorImpl::new().validate(&AnalyzerConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_scheme_and_zero_timeout() {
        let validator = ConfigValidatorImpl::new();

        let config = AnalyzerConfig {
            endpoint: "ftp://scan.example.com".to_string(),
            ..AnalyzerConfig::default()
        };
        let err = validator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("http or https"));

        let config = AnalyzerConfig {
            timeout_seconds: 0,
            ..AnalyzerConfig::default()
        };
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_header_name() {
        let mut headers = HashMap::new();
        headers.insert(" ".to_string(), "value".to_string());
        let config = AnalyzerConfig {
            headers: Some(headers),
            ..AnalyzerConfig::default()
        };

        let err = ConfigValidatorImpl::new()
            .validate_with_context(&config, "fscan.toml")
            .unwrap_err();
        assert!(err.to_string().contains("fscan.toml"));
    }

    #[test]
    fn test_rejects_unsendable_headers() {
        let validator = ConfigValidatorImpl::new();

        let mut headers = HashMap::new();
        headers.insert("X Bad".to_string(), "value".to_string());
        let config = AnalyzerConfig {
            headers: Some(headers),
            ..AnalyzerConfig::default()
        };
        let err = validator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid header name 'X Bad'"));

        let mut headers = HashMap::new();
        headers.insert("X-Api-Key".to_string(), "abc\ndef".to_string());
        let config = AnalyzerConfig {
            headers: Some(headers),
            ..AnalyzerConfig::default()
        };
        let err = validator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid value for header 'X-Api-Key'"));

        let mut headers = HashMap::new();
        headers.insert("X-Api-Key".to_string(), "abc".to_string());
        let config = AnalyzerConfig {
            headers: Some(headers),
            ..AnalyzerConfig::default()
        };
        assert!(validator.validate(&config).is_ok());
    }
}
