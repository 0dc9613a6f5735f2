//! Session use case implementation.
//!
//! This module provides the `SessionUseCase` which runs the two remote
//! orchestrations against the session store:
//!
//! - quality scoring, whose outcome is committed back into the session
//! - session logging, which only reads the session
//!
//! Both take their request snapshot from the store before the first await,
//! so edits made while a call is in flight never leak into its payload.

use crate::session::SessionStore;
use phenoselect_core::service::{LoggingService, ScoringService};
use phenoselect_core::session::Mutation;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Callback type for session logging errors.
pub type LoggingErrorCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Use case coordinating the session store with the remote services.
///
/// # Thread Safety
///
/// All internal components are wrapped in `Arc`, so a use case can be cloned
/// into spawned tasks. Scoring and logging may run concurrently with each
/// other and with user actions on the store.
#[derive(Clone)]
pub struct SessionUseCase {
    /// Owner of the session state
    store: SessionStore,
    /// Remote quality scoring
    scoring_service: Arc<dyn ScoringService>,
    /// Remote session logging
    logging_service: Arc<dyn LoggingService>,
    /// Optional out-of-band sink for logging failures (for UI notifications)
    logging_error_callback: Arc<RwLock<Option<LoggingErrorCallback>>>,
}

impl SessionUseCase {
    /// Creates a new `SessionUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Owner of the session state
    /// * `scoring_service` - Service computing quality scores
    /// * `logging_service` - Service persisting session records
    pub fn new(
        store: SessionStore,
        scoring_service: Arc<dyn ScoringService>,
        logging_service: Arc<dyn LoggingService>,
    ) -> Self {
        Self {
            store,
            scoring_service,
            logging_service,
            logging_error_callback: Arc::new(RwLock::new(None)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Sets a callback to be invoked when saving a session record fails.
    pub async fn set_logging_error_callback(&self, callback: LoggingErrorCallback) {
        *self.logging_error_callback.write().await = Some(callback);
    }

    /// Recomputes the quality score for the currently selected terms.
    ///
    /// Commits exactly one of `SetQualityScore` / `SetScoringError`. With no
    /// terms selected the score is reset to 0 without calling the service.
    /// Errors never escape this method; they end up in the session's
    /// scoring error slot.
    ///
    /// A response that arrives after further edits is still committed.
    pub async fn calculate_quality_score(&self) {
        let (terms, started_at) = self
            .store
            .read_at_revision(|state| state.session.selected_terms().to_vec())
            .await;

        let mutation = if terms.is_empty() {
            tracing::debug!("[ScoringOrchestrator] No terms selected, resetting score to 0");
            Mutation::SetQualityScore(0.0)
        } else {
            tracing::debug!(
                "[ScoringOrchestrator] Scoring {} terms (revision={})",
                terms.len(),
                started_at
            );
            match self.scoring_service.score(&terms).await {
                Ok(response) => {
                    tracing::info!(
                        "[ScoringOrchestrator] Quality score {} for {} terms",
                        response.scaled_score,
                        terms.len()
                    );
                    Mutation::SetQualityScore(response.scaled_score)
                }
                Err(e) => {
                    tracing::warn!("[ScoringOrchestrator] Scoring failed: {}", e);
                    Mutation::SetScoringError(e)
                }
            }
        };

        let committed_at = self.store.commit(mutation).await;
        if committed_at != started_at + 1 {
            tracing::debug!(
                "[ScoringOrchestrator] Result for revision {} committed at revision {} after {} intervening commits",
                started_at,
                committed_at,
                committed_at - started_at - 1
            );
        }
    }

    /// Sends a record of the current session to the logging service.
    ///
    /// Never mutates the session. Failures are reported through tracing and
    /// the logging error callback, if one is set.
    pub async fn save_session_data(&self) {
        let record = self.store.read(|state| state.session.to_record()).await;

        match self.logging_service.save_session(&record).await {
            Ok(()) => {
                tracing::info!(
                    "[LoggingOrchestrator] Saved session {} ({} terms)",
                    record.session_id,
                    record.selected_terms.len()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "[LoggingOrchestrator] Failed to save session {}: {}",
                    record.session_id,
                    e
                );
                let callback = self.logging_error_callback.read().await.clone();
                if let Some(callback) = callback {
                    callback(format!("Failed to save session {}: {}", record.session_id, e));
                }
            }
        }
    }
}
