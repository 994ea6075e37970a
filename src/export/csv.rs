use super::model::JobExport;
use crate::errors::{AppError, AppResult};
use csv::Writer;

/// Write the job rows as CSV to the given file.
pub fn write_csv(path: &str, rows: &[JobExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "pid",
        "description",
        "start_time",
        "end_time",
        "duration_secs",
        "severity",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(&[
            row.pid.to_string(),
            row.description.clone(),
            row.start_time.clone(),
            row.end_time.clone(),
            row.duration_secs.to_string(),
            row.severity.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
