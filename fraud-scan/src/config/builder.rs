use crate::config::types::AnalyzerConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::Result;
use crate::traits::ConfigValidator;
use std::collections::HashMap;

/// Builder for AnalyzerConfig to improve API ergonomics
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Create a new config builder seeded with defaults
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Set the analysis endpoint
    #[must_use]
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set the message used when a failure carries no server message
    #[must_use]
    pub fn fallback_message<S: Into<String>>(mut self, message: S) -> Self {
        self.config.fallback_message = Some(message.into());
        self
    }

    /// Add a single header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.config
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        ConfigValidatorImpl::new().validate(&self.config)?;
        Ok(self.config)
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
