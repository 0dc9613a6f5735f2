//! Remote service contracts.
//!
//! This module provides the traits the orchestrators call to reach the
//! external scoring and logging services. Implementations live in
//! `phenoselect-interaction` (HTTP) and in tests (mocks).

use crate::error::ServiceError;
use crate::session::{SessionRecord, Term};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Response of the scoring service.
///
/// Only `scaled_score` is consumed; any other fields the service sends are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub scaled_score: f64,
}

/// Computes a quality score for a term selection.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Scores the given terms. Order is significant and must be sent as given.
    ///
    /// # Returns
    ///
    /// - `Ok(ScoreResponse)`: The service produced a score
    /// - `Err(ServiceError)`: Transport failure, timeout, error status, or malformed body
    async fn score(&self, terms: &[Term]) -> Result<ScoreResponse, ServiceError>;
}

/// Persists session records.
#[async_trait]
pub trait LoggingService: Send + Sync {
    /// Sends one session record. Callers do not retry.
    async fn save_session(&self, record: &SessionRecord) -> Result<(), ServiceError>;
}

/// A no-op implementation of LoggingService for when no log endpoint is configured.
pub struct NoOpLoggingService;

#[async_trait]
impl LoggingService for NoOpLoggingService {
    async fn save_session(&self, record: &SessionRecord) -> Result<(), ServiceError> {
        tracing::debug!(
            "[NoOpLoggingService] Dropping record for session {}",
            record.session_id
        );
        Ok(())
    }
}
