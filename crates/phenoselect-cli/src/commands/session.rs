use anyhow::{Result, bail};
use phenoselect_application::{SessionFactory, SessionStore};
use phenoselect_core::config::ServiceConfig;
use phenoselect_core::navigation::{self, GateDecision, Route};
use phenoselect_core::registry;
use std::sync::Arc;

pub struct SessionOptions {
    pub system_ids: Vec<String>,
    pub term_ids: Vec<String>,
    pub constrained: bool,
    pub found_all: Option<bool>,
}

/// Walks through a session the way the front end would, then prints the record.
pub async fn run(config: ServiceConfig, options: SessionOptions) -> Result<()> {
    let store = SessionStore::new();

    let accepted = store.read(|state| state.terms_of_use_accepted()).await;
    if let GateDecision::Redirect(route) = navigation::resolve(Route::BodySystems, accepted) {
        tracing::info!("Redirected to {}, accepting terms of use", route);
        store.accept_terms_of_use().await;
    }

    let accepted = store.read(|state| state.terms_of_use_accepted()).await;
    if navigation::resolve(Route::Search, accepted) != GateDecision::Proceed {
        bail!("Terms of use were not accepted");
    }

    for id in &options.system_ids {
        store.toggle_system(registry::require_body_system(id)?).await;
    }
    for id in &options.term_ids {
        store
            .add_term(registry::require_term(id)?, options.constrained)
            .await;
    }
    if let Some(found_all) = options.found_all {
        store.set_found_all_conditions(found_all).await;
    }

    let usecase = SessionFactory::new(config).create_use_case_with_store(store.clone());
    usecase
        .set_logging_error_callback(Arc::new(|message: String| eprintln!("warning: {}", message)))
        .await;

    usecase.calculate_quality_score().await;
    if let Some(error) = store
        .read(|state| state.session.scoring_error().cloned())
        .await
    {
        eprintln!("warning: scoring failed: {}", error);
    }

    usecase.save_session_data().await;

    let record = store.read(|state| state.session.to_record()).await;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
