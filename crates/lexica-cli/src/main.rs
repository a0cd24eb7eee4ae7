use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use lexica_core::ConceptFileFilter;
use lexica_sqlite::{SqliteConceptStore, SqliteConfig};

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands, LogLevel};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let config = CliConfig::load(cli.config)?;
    let db_path = cli.db_path.unwrap_or_else(|| config.database_path.clone());
    debug!(db_path = %db_path.display(), "opening concept store");

    let store = SqliteConceptStore::open(SqliteConfig::new(db_path))
        .map_err(|e| anyhow::anyhow!("failed to open concept store: {e}"))?;

    match cli.command {
        Commands::AddConcepts { fname } => commands::add::add_concepts(&store, &fname)?,

        Commands::AddConceptsDir { dirname } => {
            let filter = ConceptFileFilter::new(config.concept_file_filter.clone());
            commands::add::add_concepts_dir(&store, &dirname, &filter)?
        }

        Commands::QueryInput { sent } => commands::query::query_input(&store, &sent)?,

        Commands::QueryInputFile { fname } => {
            commands::query::query_input_file(&store, &fname)?
        }

        Commands::Clean => commands::clean::clean(&store)?,
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let level: LevelFilter = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        cli.log_level.unwrap_or(LogLevel::Off).into()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
