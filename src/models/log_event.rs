use super::event_kind::EventKind;
use chrono::NaiveTime;

/// One parsed log record. Immutable after parsing.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub time: NaiveTime,     // ⇔ field 1 (TEXT "HH:MM:SS")
    pub description: String, // ⇔ field 2 (free text)
    pub kind: EventKind,     // ⇔ field 3 ('START' | 'END' | other)
    pub pid: u32,            // ⇔ field 4 (positive integer)
}

impl LogEvent {
    pub fn new(time: NaiveTime, description: String, kind: EventKind, pid: u32) -> Self {
        Self {
            time,
            description,
            kind,
            pid,
        }
    }
}
