use crate::session::SessionStore;
use crate::session_usecase::SessionUseCase;
use phenoselect_core::config::ServiceConfig;
use phenoselect_core::service::{LoggingService, NoOpLoggingService, ScoringService};
use phenoselect_interaction::{HttpLoggingService, HttpScoringService};
use std::sync::Arc;

/// Factory for wiring a `SessionUseCase` to its remote services.
pub struct SessionFactory {
    config: ServiceConfig,
}

impl SessionFactory {
    /// Creates a new SessionFactory.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoints of the scoring and logging services
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Creates a use case for a brand new session, talking HTTP to both services.
    pub fn create_use_case(&self) -> SessionUseCase {
        self.create_use_case_with_store(SessionStore::new())
    }

    /// Creates a use case over an existing store.
    pub fn create_use_case_with_store(&self, store: SessionStore) -> SessionUseCase {
        tracing::debug!(
            "[SessionFactory] scoring={} logging={}",
            self.config.scoring.url,
            self.config.logging.url
        );
        let scoring: Arc<dyn ScoringService> =
            Arc::new(HttpScoringService::from_config(&self.config.scoring));
        let logging: Arc<dyn LoggingService> =
            Arc::new(HttpLoggingService::from_config(&self.config.logging));
        SessionUseCase::new(store, scoring, logging)
    }

    /// Creates a use case that scores over HTTP but discards session records.
    pub fn create_use_case_without_logging(&self, store: SessionStore) -> SessionUseCase {
        let scoring: Arc<dyn ScoringService> =
            Arc::new(HttpScoringService::from_config(&self.config.scoring));
        SessionUseCase::new(store, scoring, Arc::new(NoOpLoggingService))
    }
}
