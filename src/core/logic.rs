use crate::config::Config;
use crate::core::{classify, parser, reconstruct};
use crate::errors::{AppError, AppResult};
use crate::models::{job_summary::JobSummary, severity::Severity};
use std::fs;
use std::path::Path;

pub struct Core;

impl Core {
    /// Full pipeline minus emission: read → parse → reconstruct →
    /// classify. Fails before producing anything when the file is
    /// missing or any record is malformed.
    pub fn run_report(path: &str, cfg: &Config) -> AppResult<Vec<(JobSummary, Severity)>> {
        if !Path::new(path).exists() {
            return Err(AppError::FileNotFound(path.to_string()));
        }

        let content = fs::read_to_string(path)?;
        let events = parser::parse_events(&content)?;
        let summaries = reconstruct::reconstruct_jobs(&events);

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let severity = classify::classify(summary.duration_secs, cfg);
                (summary, severity)
            })
            .collect())
    }
}
