//! JSON-over-HTTP implementation of the advisory port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::advisory::{AdvisoryError, AdvisoryPort, AdvisoryRequest, AdvisoryResponse};

/// Caller-owned HTTP client for the advisory service. Construct one per
/// endpoint/credential pair and hand it to the engine; nothing here is
/// cached process-wide.
pub struct HttpAdvisoryClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpAdvisoryClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AdvisoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisoryError::Configuration(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl AdvisoryPort for HttpAdvisoryClient {
    async fn analyze(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AdvisoryError::Timeout(self.timeout)
            } else {
                AdvisoryError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(AdvisoryError::ServiceUnavailable(status.as_u16()));
        }
        if !status.is_success() {
            return Err(AdvisoryError::Rejected(status.as_u16()));
        }

        response
            .json::<AdvisoryResponse>()
            .await
            .map_err(|e| AdvisoryError::Malformed(e.to_string()))
    }
}
