//! Job reconstructor: pair START/END events sharing a pid.

use crate::models::{job_summary::JobSummary, log_event::LogEvent};
use crate::utils::time::seconds_between;
use std::collections::BTreeMap;

/// Build one `JobSummary` per pid having at least one START and one END.
///
/// Events keep their file order inside each pid group, and the first
/// START plus the first END form the canonical pair. Groups missing
/// either endpoint are dropped silently. Output is ordered by ascending
/// pid, so the report is reproducible for the same input.
pub fn reconstruct_jobs(events: &[LogEvent]) -> Vec<JobSummary> {
    let mut groups: BTreeMap<u32, Vec<&LogEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(event.pid).or_default().push(event);
    }

    let mut summaries = Vec::new();

    for (pid, group) in groups {
        let start = group.iter().find(|e| e.kind.is_start());
        let end = group.iter().find(|e| e.kind.is_end());

        if let (Some(start), Some(end)) = (start, end) {
            summaries.push(JobSummary {
                pid,
                description: start.description.clone(),
                start_time: start.time,
                end_time: end.time,
                duration_secs: seconds_between(start.time, end.time),
            });
        }
    }

    summaries
}
