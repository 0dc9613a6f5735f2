//! HttpScoringService - REST client for the phenotype quality scoring service.
//!
//! Sends the selected terms as a JSON array and reads back `scaled_score`.

use crate::http::{decode_json, ensure_success, map_request_error};
use async_trait::async_trait;
use phenoselect_core::ServiceError;
use phenoselect_core::config::EndpointConfig;
use phenoselect_core::service::{ScoreResponse, ScoringService};
use phenoselect_core::session::Term;
use reqwest::Client;
use std::time::Duration;

/// Scoring service reached over HTTP.
#[derive(Clone)]
pub struct HttpScoringService {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpScoringService {
    /// Creates a client posting to `url` with the given per-request timeout.
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
impl ScoringService for HttpScoringService {
    async fn score(&self, terms: &[Term]) -> Result<ScoreResponse, ServiceError> {
        tracing::debug!(
            "[HttpScoringService] POST {} with {} terms",
            self.url,
            terms.len()
        );

        let response = self
            .client
            .post(&self.url)
            .json(terms)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_request_error(e, self.timeout))?;

        let response = ensure_success(response).await?;
        let score: ScoreResponse = decode_json(response, self.timeout).await?;

        tracing::debug!("[HttpScoringService] scaled_score={}", score.scaled_score);
        Ok(score)
    }
}
