use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::types::AnalysisRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Request};
use url::Url;
use uuid::Uuid;

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Builds the POST request for one analysis
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    endpoint: Url,
    headers: HeaderMap,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: &AnalyzerConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers.iter().flatten() {
            let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| {
                AnalysisError::invalid_config(format!("Invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                AnalysisError::invalid_config(format!("Invalid value for header '{}': {}", name, e))
            })?;
            headers.insert(name, value);
        }

        Ok(Self {
            client,
            endpoint,
            headers,
        })
    }

    /// Build the request, returning it together with its correlation id
    pub fn build_request(&self, request: &AnalysisRequest) -> Result<(Request, String)> {
        let request_id = Uuid::new_v4().to_string();

        // `headers` replaces same-named defaults instead of appending
        let built = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("fscan/", env!("CARGO_PKG_VERSION")))
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .json(request)
            .headers(self.headers.clone())
            .build()
            .map_err(AnalysisError::Http)?;

        Ok((built, request_id))
    }
}
