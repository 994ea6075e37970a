//! Record parser: raw log text → ordered `LogEvent` sequence.
//!
//! The input is headerless CSV, one record per line:
//! `HH:MM:SS,<description>,<TYPE>,<pid>`. Any malformed line fails the
//! whole parse; nothing downstream runs on partial input.

use crate::errors::{AppError, AppResult};
use crate::models::{event_kind::EventKind, log_event::LogEvent};
use crate::utils::time::parse_time;
use csv::ReaderBuilder;

pub fn parse_events(content: &str) -> AppResult<Vec<LogEvent>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut events = Vec::new();

    for (idx, row) in reader.records().enumerate() {
        let line = idx + 1;
        let record = row?;

        if record.len() != 4 {
            return Err(AppError::MalformedRecord {
                line,
                reason: format!("expected 4 fields, found {}", record.len()),
            });
        }

        let time = parse_time(&record[0]).ok_or_else(|| AppError::MalformedRecord {
            line,
            reason: format!("invalid time '{}' (expected HH:MM:SS)", &record[0]),
        })?;

        let pid: u32 = record[3]
            .trim()
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| AppError::MalformedRecord {
                line,
                reason: format!("invalid pid '{}' (expected positive integer)", &record[3]),
            })?;

        let kind = EventKind::from_raw(&record[2]);

        events.push(LogEvent::new(time, record[1].to_string(), kind, pid));
    }

    Ok(events)
}
