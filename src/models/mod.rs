pub mod event_kind;
pub mod job_summary;
pub mod log_event;
pub mod severity;
