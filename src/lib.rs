//! jobreport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Run the report for an already-resolved CLI + config pair.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let rows = crate::core::Core::run_report(&cli.log_file, cfg)?;

    crate::core::report::emit_report(&rows, cfg);

    if let Some(path) = &cli.export {
        export::export_summaries(path, &cli.format, &rows, cli.force)?;
    }

    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config file first, then CLI overrides on top.
    let mut cfg = if cli.no_config {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(level) = cli.min_level {
        cfg.min_level = level;
    }
    if let Some(secs) = cli.warn_secs {
        cfg.warning_threshold_seconds = secs;
    }
    if let Some(secs) = cli.error_secs {
        cfg.error_threshold_seconds = secs;
    }

    dispatch(&cli, &cfg)
}
