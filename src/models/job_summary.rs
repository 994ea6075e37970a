use chrono::NaiveTime;

/// A completed job: one START paired with one END for the same pid.
/// Only built when both endpoints were found; incomplete pid groups
/// produce no summary at all.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub pid: u32,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Whole seconds, always in `[0, 86400)` (wrap-around handled at
    /// reconstruction time).
    pub duration_secs: i64,
}

impl JobSummary {
    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }
}
