use crate::error::Result;
use crate::types::{AnalysisRequest, AnalysisResult};
use std::future::Future;

/// Trait for the outbound call to the analysis service
pub trait AnalysisService: Send + Sync {
    /// Submit one request and wait for the verdict
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
