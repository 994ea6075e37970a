use crate::config::LogLevel;
use crate::export::ExportFormat;
use clap::Parser;

/// Command-line interface definition for jobreport
/// CLI application to reconstruct jobs from a START/END process log
#[derive(Parser)]
#[command(
    name = "jobreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct per-process jobs from a START/END log and report how long they ran",
    long_about = None
)]
pub struct Cli {
    /// Path of the log file to analyse
    #[arg(value_name = "LOG_FILE")]
    pub log_file: String,

    /// Minimum level a report line must reach to be printed
    #[arg(long = "min-level", value_enum, help = "Hide report lines below this level")]
    pub min_level: Option<LogLevel>,

    /// Override the WARNING duration threshold
    #[arg(long = "warn-secs", value_name = "SECONDS")]
    pub warn_secs: Option<i64>,

    /// Override the ERROR duration threshold
    #[arg(long = "error-secs", value_name = "SECONDS")]
    pub error_secs: Option<i64>,

    /// Also write the report rows to this file
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<String>,

    /// Export format: csv, json
    #[arg(long, value_enum, default_value = "csv", requires = "export")]
    pub format: ExportFormat,

    /// Overwrite the export file if it already exists
    #[arg(long, short = 'f', requires = "export")]
    pub force: bool,

    /// Ignore the user config file (useful for tests)
    #[arg(long = "no-config", hide = true)]
    pub no_config: bool,
}
