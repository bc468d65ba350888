//! Spendlog CLI - interactive expense ledger over a SQLite file

use clap::Parser;
use std::path::PathBuf;

use spendlog::storage::{DEFAULT_CATEGORIES, SqliteStore};
use spendlog::ui::Icons;
use spendlog::{config, shell, ui};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "spendlog")]
#[command(version)]
#[command(about = "Personal expense ledger - record, list, and summarize categorized spending")]
struct Cli {
    /// Path to the expense database (overrides spendlog.toml)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging stays out of the menu unless verbosity is requested
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let loaded = config::load_config(None)?;
    let database = cli
        .database
        .or_else(|| {
            loaded
                .as_ref()
                .and_then(|c| c.database.as_ref().map(PathBuf::from))
        })
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_DATABASE_FILE));

    config::ensure_db_dir(&database)?;
    let mut store = SqliteStore::open(&database)?;
    store.seed_default_categories(DEFAULT_CATEGORIES)?;

    println!(
        "{} Connected to database {}",
        Icons::DATABASE,
        ui::dim(&database.display().to_string())
    );

    shell::run(&mut store)?;
    Ok(())
}
