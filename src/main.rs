use std::fs::{create_dir_all, File};
use std::sync::Mutex;

use clap::Parser;
use pdf_library::LibraryConfig;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Cli, Commands};

mod app;
mod cli;
mod commands;
mod event;
mod ui;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = LibraryConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    init_tracing(&config, matches!(command, Commands::Tui))?;
    let catalog = config.load_catalog()?;
    tracing::debug!(documents = catalog.len(), host = %config.host, "catalog loaded");

    match command {
        Commands::Tui => {
            let app = App::new(config, catalog)?;
            let terminal = ratatui::init();
            let result = app.run(terminal).await;
            ratatui::restore();
            result
        }
        Commands::List => commands::list(&config, &catalog),
        Commands::View { filename, no_probe } => {
            commands::view(&config, &catalog, &filename, !no_probe && config.probe_before_view).await
        }
        Commands::Redirect { filename } => commands::redirect(&config, &catalog, &filename).await,
        Commands::Download { filename } => commands::download(&config, &catalog, &filename).await,
        Commands::Diagnose { json } => commands::diagnose(&config, &catalog, json).await,
    }
}

/// The TUI owns the terminal, so its logs go to a file.
fn init_tracing(config: &LibraryConfig, to_file: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        create_dir_all(&config.log_dir)?;
        let file = File::create(config.log_dir.join("pdf-library.log"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
