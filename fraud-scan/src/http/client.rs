use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, AnalysisResult};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Analysis service reached over HTTP
#[derive(Clone)]
pub struct HttpAnalysisService {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl HttpAnalysisService {
    /// Create a new HTTP service client with configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config)?;
        let response_converter = ResponseConverterImpl::new();

        Ok(Self {
            client,
            request_builder,
            response_converter,
        })
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let (http_request, request_id) = self.request_builder.build_request(request)?;
        debug!(%request_id, url = %http_request.url(), chars = request.text.chars().count(), "sending analysis request");

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(AnalysisError::Http)?;
        debug!(%request_id, status = response.status().as_u16(), "analysis response received");

        self.response_converter.convert_response(response).await
    }
}
