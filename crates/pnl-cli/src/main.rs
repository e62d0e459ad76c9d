//! P&L Tracker CLI
//!
//! Command-line interface for the local store

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "pnl-tracker")]
#[command(about = "P&L Tracker - local store management", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./pnl-tracker.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the database and flags, overriding the settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the tables and seed default data if needed
    Init,
    /// Show store health, table counts and flags
    Status,
    /// Delete the database and recreate empty tables
    Recreate,
    /// Delete the database, clear flags and reseed default data
    Reset(commands::reset::ResetArgs),
    /// List expense categories
    Categories,
}

fn main() {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = config::AppConfig::load(cli.config.as_deref(), cli.data_dir).and_then(|app| {
        pnl_core::logging_facility::init(app.profile);
        tracing::debug!(data_dir = ?app.store.data_dir, db_name = %app.store.db_name, "configuration loaded");

        match cli.command {
            Commands::Init => commands::init::execute(&app),
            Commands::Status => commands::status::execute(&app),
            Commands::Recreate => commands::recreate::execute(&app),
            Commands::Reset(args) => commands::reset::execute(&app, args),
            Commands::Categories => commands::categories::execute(&app),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
