use anyhow::Result;
use phenoselect_application::{SessionFactory, SessionStore};
use phenoselect_core::config::ServiceConfig;
use phenoselect_core::registry;

pub async fn run(config: ServiceConfig, term_ids: &[String]) -> Result<()> {
    let store = SessionStore::new();
    for id in term_ids {
        store.add_term(registry::require_term(id)?, false).await;
    }

    let usecase = SessionFactory::new(config).create_use_case_without_logging(store.clone());
    usecase.calculate_quality_score().await;

    let (score, error) = store
        .read(|state| {
            (
                state.session.quality_score(),
                state.session.scoring_error().cloned(),
            )
        })
        .await;

    match error {
        Some(error) => anyhow::bail!("Scoring failed: {}", error),
        None => println!("Quality score: {:.2}", score),
    }

    Ok(())
}
