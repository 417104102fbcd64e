use std::path::Path;

use anyhow::Context;
use clap::Parser;

use vetretire::api::ApiState;
use vetretire::config::AppConfig;
use vetretire::ingest::{self, CsvImport, ImportOptions, LocationImport, StateInfoImport};
use vetretire::store::FjallStore;
use vetretire::{VetRetireError, logging, seed, web};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::ImportLocations { csv_path, clear } => {
            import::<LocationImport>(&config, &csv_path, ImportOptions { clear })
        }
        Commands::ImportStates { csv_path, clear } => {
            import::<StateInfoImport>(&config, &csv_path, ImportOptions { clear })
        }
        Commands::Seed => {
            let mut store = open_store(&config)?;
            let locations = seed::populate(&mut store)?;
            for location in &locations {
                println!("  + Created: {location}");
            }
            println!("Successfully populated {} locations!", locations.len());
            Ok(())
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let store = open_store(&config)?;
            web::run(&config.server, ApiState::new(store)).await
        }
    }
}

fn open_store(config: &AppConfig) -> anyhow::Result<FjallStore> {
    FjallStore::open(&config.store.path)
        .with_context(|| format!("Failed to open store at {}", config.store.path))
}

fn import<I: CsvImport>(config: &AppConfig, path: &Path, options: ImportOptions) -> anyhow::Result<()> {
    let mut store = open_store(config)?;

    let report = match ingest::import_file::<I, _>(&mut store, path, options) {
        Ok(report) => report,
        Err(error @ VetRetireError::FileNotFound { .. }) => return Err(error.into()),
        Err(error) => anyhow::bail!("Import failed: {error}"),
    };

    if options.clear {
        println!("Cleared {} existing {}", report.cleared, I::ENTITY);
    }
    for outcome in &report.outcomes {
        println!("{outcome}");
    }
    println!("\n{}", report.summary());
    Ok(())
}
