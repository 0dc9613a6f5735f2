use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phenoselect_core::config::ServiceConfig;
use phenoselect_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "phenoselect")]
#[command(about = "PhenoSelect CLI - phenotype term selection with remote quality scoring", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable body systems
    Systems,
    /// List or search phenotype terms
    Terms {
        /// Case-insensitive text matched against labels and symptoms
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Score a selection of terms with the configured scoring service
    Score {
        /// Term codes, e.g. HP:0000316
        #[arg(required = true)]
        term_ids: Vec<String>,
    },
    /// Run a complete session: select, score, and log it
    Session {
        /// Body system codes to select
        #[arg(long = "system")]
        system_ids: Vec<String>,
        /// Term codes to select
        #[arg(long = "term")]
        term_ids: Vec<String>,
        /// Record the terms as added with filtering enabled
        #[arg(long)]
        constrained: bool,
        /// Whether the user found all conditions they were looking for
        #[arg(long)]
        found_all: Option<bool>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<ServiceConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new_default().context("Failed to locate config directory")?,
    };
    service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Systems => commands::catalog::systems(),
        Commands::Terms { query } => commands::catalog::terms(query.as_deref()),
        Commands::Score { term_ids } => {
            let config = load_config(cli.config)?;
            commands::score::run(config, &term_ids).await?
        }
        Commands::Session {
            system_ids,
            term_ids,
            constrained,
            found_all,
        } => {
            let config = load_config(cli.config)?;
            let options = commands::session::SessionOptions {
                system_ids,
                term_ids,
                constrained,
                found_all,
            };
            commands::session::run(config, options).await?
        }
    }

    Ok(())
}
