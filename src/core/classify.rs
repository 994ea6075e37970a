//! Severity classifier: duration against the configured thresholds.

use crate::config::Config;
use crate::models::severity::Severity;

/// Boundaries are strict: a duration exactly at a threshold stays in
/// the lower tier (300 s → Ok, 600 s → Warning with the defaults).
pub fn classify(duration_secs: i64, cfg: &Config) -> Severity {
    if duration_secs > cfg.error_threshold_seconds {
        Severity::Error
    } else if duration_secs > cfg.warning_threshold_seconds {
        Severity::Warning
    } else {
        Severity::Ok
    }
}
