//! rStaffDesk library root.
//! Exposes the lane engine, the timesheet paging/export layer, the API
//! client, the CLI parser and the high-level run() function.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::AppContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Login { .. } | Commands::Logout => {
            cli::commands::session::handle(&cli.command, ctx)
        }
        Commands::Timesheets { .. } => cli::commands::timesheets::handle(&cli.command, ctx).await,
        Commands::Reminders { .. } => cli::commands::reminders::handle(&cli.command, ctx).await,
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, ctx).await,
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::load_from(&config_path)?;
    if let Some(api) = &cli.api {
        cfg.api_base_url = api.clone();
    }

    let ctx = AppContext::new(cfg, config_path);

    // Single-threaded event loop: the only suspension points are API calls.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&cli, &ctx))
}
