//! Vendas CLI - Command-line interface for the sales dashboard
//!
//! Inspect and change dashboard preferences, browse exported sales and check
//! the environment the dashboard runs in.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::open_store;
use crate::commands::completions::run_completions;
use crate::commands::display::run_display;
use crate::commands::env_check::run_env_check;
use crate::commands::format::run_format;
use crate::commands::prefs::run_prefs;
use crate::commands::sales::run_sales;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vendas=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prefs { command } => {
            let store = open_store(cli.store, cli.no_store)?;
            run_prefs(command, &store)?;
        }
        Commands::Display { command } => {
            let store = open_store(cli.store, cli.no_store)?;
            run_display(command, &store)?;
        }
        Commands::Sales { file, limit, json } => {
            let store = open_store(cli.store, cli.no_store)?;
            run_sales(&file, limit, json, &store)?;
        }
        Commands::Format { amount } => run_format(&amount)?,
        Commands::EnvCheck { json } => run_env_check(json)?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
