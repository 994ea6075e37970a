// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::JobExport;

use crate::errors::AppResult;
use crate::models::{job_summary::JobSummary, severity::Severity};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the classified job summaries to `path` in the chosen format.
pub fn export_summaries(
    path: &str,
    format: &ExportFormat,
    rows: &[(JobSummary, Severity)],
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(Path::new(path), force)?;

    let rows: Vec<JobExport> = rows
        .iter()
        .map(|(job, severity)| JobExport::from_row(job, *severity))
        .collect();

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows)?,
        ExportFormat::Json => json::write_json(path, &rows)?,
    }

    notify_export_success(format.as_str(), Path::new(path));
    Ok(())
}
