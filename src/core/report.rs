//! Report emitter: classified summaries → level-tagged console lines.

use crate::config::{Config, LogLevel};
use crate::models::{job_summary::JobSummary, severity::Severity};
use crate::ui::messages;
use crate::utils::time::format_seconds;

/// Emit one line per completed job through the console channel, honoring
/// the configured minimum level. An empty job set is a valid terminal
/// report: exactly one notice, no header, no error.
pub fn emit_report(rows: &[(JobSummary, Severity)], cfg: &Config) {
    if rows.is_empty() {
        messages::plain("No completed jobs found.");
        return;
    }

    if cfg.min_level <= LogLevel::Info {
        messages::header("Job Report:");
    }

    for (job, severity) in rows {
        match severity {
            Severity::Error => messages::error(format!(
                "Job {} ({}) took longer than {} minutes ({})",
                job.pid,
                job.description,
                cfg.error_threshold_minutes(),
                format_seconds(job.duration_secs),
            )),
            Severity::Warning => {
                if cfg.min_level <= LogLevel::Warning {
                    messages::warning(format!(
                        "Job {} ({}) took longer than {} minutes ({})",
                        job.pid,
                        job.description,
                        cfg.warning_threshold_minutes(),
                        format_seconds(job.duration_secs),
                    ));
                }
            }
            Severity::Ok => {
                if cfg.min_level <= LogLevel::Info {
                    messages::info(format!(
                        "Job {} ({}) took {} - OK",
                        job.pid,
                        job.description,
                        format_seconds(job.duration_secs),
                    ));
                }
            }
        }
    }
}
