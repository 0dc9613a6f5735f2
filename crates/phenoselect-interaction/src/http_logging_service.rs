//! HttpLoggingService - REST client for the session logging service.

use crate::http::{ensure_success, map_request_error};
use async_trait::async_trait;
use phenoselect_core::ServiceError;
use phenoselect_core::config::EndpointConfig;
use phenoselect_core::service::LoggingService;
use phenoselect_core::session::SessionRecord;
use reqwest::Client;
use std::time::Duration;

/// Logging service reached over HTTP. Any 2xx answer counts as saved; the body is ignored.
#[derive(Clone)]
pub struct HttpLoggingService {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpLoggingService {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::new(config.url.clone(), config.timeout())
    }
}

#[async_trait]
impl LoggingService for HttpLoggingService {
    async fn save_session(&self, record: &SessionRecord) -> Result<(), ServiceError> {
        tracing::debug!(
            "[HttpLoggingService] POST {} for session {}",
            self.url,
            record.session_id
        );

        let response = self
            .client
            .post(&self.url)
            .json(record)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_request_error(e, self.timeout))?;

        ensure_success(response).await?;
        Ok(())
    }
}
