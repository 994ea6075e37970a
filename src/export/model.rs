use crate::models::{job_summary::JobSummary, severity::Severity};
use serde::Serialize;

/// Flattened export row: one completed job with its severity tier.
#[derive(Debug, Serialize)]
pub struct JobExport {
    pub pid: u32,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_secs: i64,
    pub severity: String,
}

impl JobExport {
    pub fn from_row(job: &JobSummary, severity: Severity) -> Self {
        Self {
            pid: job.pid,
            description: job.description.clone(),
            start_time: job.start_str(),
            end_time: job.end_str(),
            duration_secs: job.duration_secs,
            severity: severity.as_str().to_string(),
        }
    }
}
